use crate::errors::Error;

/// Chain aliases accepted by the Etherscan V2 API, lowercase, paired with
/// their chain id. The first alias listed for an id is its display name.
pub const CHAINS: &[(&str, &str)] = &[
    // Mainnets
    ("ethereum", "1"),
    ("mainnet", "1"),
    ("eth", "1"),
    ("abstract", "2741"),
    ("apechain", "33139"),
    ("arbitrum-nova", "42170"),
    ("arbitrum-one", "42161"),
    ("arbitrum", "42161"),
    ("avalanche", "43114"),
    ("avax", "43114"),
    ("base", "8453"),
    ("berachain", "80094"),
    ("bittorrent", "199"),
    ("bttc", "199"),
    ("blast", "81457"),
    ("bnb-smart-chain", "56"),
    ("bsc", "56"),
    ("bnb", "56"),
    ("celo", "42220"),
    ("cronos", "25"),
    ("fraxtal", "252"),
    ("gnosis", "100"),
    ("hyperevm", "999"),
    ("linea", "59144"),
    ("mantle", "5000"),
    ("memecore", "4352"),
    ("moonbeam", "1284"),
    ("moonriver", "1285"),
    ("op-mainnet", "10"),
    ("optimism", "10"),
    ("op", "10"),
    ("polygon", "137"),
    ("katana", "747474"),
    ("scroll", "534352"),
    ("sonic", "146"),
    ("sophon", "50104"),
    ("swellchain", "1923"),
    ("taiko", "167000"),
    ("unichain", "130"),
    ("wemix3.0", "1111"),
    ("world", "480"),
    ("xai", "660279"),
    ("xdc", "50"),
    ("zksync", "324"),
    ("opbnb", "204"),
    // Testnets
    ("sepolia", "11155111"),
    ("eth-sepolia", "11155111"),
    ("holesky", "17000"),
    ("hoodi-testnet", "560048"),
    ("abstract-sepolia", "11124"),
    ("apechain-curtis-testnet", "33111"),
    ("arbitrum-sepolia", "421614"),
    ("avalanche-fuji", "43113"),
    ("avax-fuji", "43113"),
    ("base-sepolia", "84532"),
    ("berachain-bepolia", "80069"),
    ("bittorrent-testnet", "1028"),
    ("blast-sepolia", "168587773"),
    ("bsc-testnet", "97"),
    ("bnb-testnet", "97"),
    ("celo-alfajores", "44787"),
    ("fraxtal-testnet", "2522"),
    ("linea-sepolia", "59141"),
    ("mantle-sepolia", "5003"),
    ("memecore-testnet", "43521"),
    ("moonbase-alpha", "1287"),
    ("monad-testnet", "10143"),
    ("op-sepolia", "11155420"),
    ("optimism-sepolia", "11155420"),
    ("polygon-amoy", "80002"),
    ("amoy", "80002"),
    ("scroll-sepolia", "534351"),
    ("sonic-blaze-testnet", "57054"),
    ("sophon-sepolia", "531050104"),
    ("swellchain-testnet", "1924"),
    ("taiko-hekla", "167009"),
    ("unichain-sepolia", "1301"),
    ("wemix3.0-testnet", "1112"),
    ("world-sepolia", "4801"),
    ("xai-sepolia", "37714555429"),
    ("xdc-apothem", "51"),
    ("zksync-sepolia", "300"),
    ("opbnb-testnet", "5611"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    pub id: String,
    pub name: String,
}

/// Resolves a chain name (case-insensitive) or a numeric chain id.
pub fn resolve_chain(identifier: &str) -> Result<Chain, Error> {
    let lowercase = identifier.trim().to_lowercase();
    let id = CHAINS
        .iter()
        .find(|(alias, _)| *alias == lowercase)
        .map(|(_, id)| (*id).to_owned())
        .unwrap_or(lowercase);

    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidChain(identifier.to_owned()));
    }

    let name = chain_name(&id);
    Ok(Chain { id, name })
}

/// Display name for a chain id, `Chain <id>` when the id is not listed.
pub fn chain_name(id: &str) -> String {
    CHAINS
        .iter()
        .find(|(_, chain_id)| *chain_id == id)
        .map(|(alias, _)| (*alias).to_owned())
        .unwrap_or_else(|| format!("Chain {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_aliases_case_insensitively() {
        for alias in ["base", "BASE", "Base"] {
            let chain = resolve_chain(alias).unwrap();
            assert_eq!(chain.id, "8453");
            assert_eq!(chain.name, "base");
        }
    }

    #[test]
    fn numeric_ids_pass_through() {
        assert_eq!(
            resolve_chain("1").unwrap(),
            Chain {
                id: "1".to_owned(),
                name: "ethereum".to_owned()
            }
        );
        assert_eq!(resolve_chain("424242").unwrap().name, "Chain 424242");
    }

    #[test]
    fn display_name_is_first_alias() {
        assert_eq!(resolve_chain("arbitrum").unwrap().name, "arbitrum-one");
        assert_eq!(resolve_chain("op").unwrap().name, "op-mainnet");
    }

    #[test]
    fn unknown_names_are_rejected() {
        for identifier in ["notachain", "", "0x1", "12a"] {
            assert!(matches!(
                resolve_chain(identifier),
                Err(Error::InvalidChain(_))
            ));
        }
    }
}
