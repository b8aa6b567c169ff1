//! Typed parameters for endpoints that take more than a couple of arguments.
//!
//! Request bodies serialize field-for-field into the JSON the server expects.
//! Optional fields are left out of the body entirely when unset (and, for
//! strings and lists, when empty) rather than being sent as `null`.

use serde::Serialize;

/// Default derivation path used by wallet creation and restore.
pub const DEFAULT_DERIVATION_PATH: &str = "m/44'/0'/0'/0/0";

/// Default network for wallet operations.
pub const DEFAULT_NETWORK: &str = "mainnet";

/// Default channel timeout, roughly one week of blocks.
pub const DEFAULT_CHANNEL_TIMEOUT_BLOCKS: u32 = 1008;

/// Confirmation target for `estimateFee`.
pub const DEFAULT_FEE_BLOCKS: u32 = 6;

/// Page size for `listTokens` and every [`Page`]d endpoint.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Result limit for token and data marketplace searches.
pub const DEFAULT_SEARCH_LIMIT: u32 = 50;

/// Output format of `getDmintContracts`.
pub const DEFAULT_DMINT_FORMAT: &str = "extended";

/// Number of contracts returned by `getMostProfitableDmint`.
pub const DEFAULT_PROFITABLE_DMINT_LIMIT: u32 = 10;

/// Minimum token balance asked for by `checkTokenAccess`.
pub const DEFAULT_MIN_BALANCE: u64 = 1;

#[allow(clippy::ref_option)]
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// `limit`/`offset` pagination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    /// Maximum number of items returned.
    pub limit: u32,
    /// Number of items skipped.
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    /// Page of `limit` items starting after `offset`.
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }
}

/// Token name/ticker search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenSearch {
    /// Name or ticker fragment, sent as `q`.
    pub query: String,
    /// Comma-separated protocol filter, omitted when `None` or empty.
    pub protocols: Option<String>,
    /// Maximum number of results.
    pub limit: u32,
}

impl TokenSearch {
    /// Search for `query` across all protocols.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            protocols: None,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Restricts results to the given comma-separated protocols.
    #[must_use]
    pub fn protocols(mut self, protocols: impl Into<String>) -> Self {
        self.protocols = Some(protocols.into());
        self
    }

    /// Overrides the result limit.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// Data marketplace search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataAssetSearch {
    /// Free-text query, sent as `q`.
    pub query: String,
    /// Asset type filter, omitted when `None` or empty.
    pub asset_type: Option<String>,
    /// Maximum number of results.
    pub limit: u32,
}

impl DataAssetSearch {
    /// Search for `query` across all asset types.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            asset_type: None,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Restricts results to one asset type.
    #[must_use]
    pub fn asset_type(mut self, asset_type: impl Into<String>) -> Self {
        self.asset_type = Some(asset_type.into());
        self
    }

    /// Overrides the result limit.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// Body of `POST /wallet/create`.
///
/// The server generates the key material; `mnemonic` asks it to also return
/// a BIP39 phrase of `word_count` words.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateWallet {
    /// Network name, for example `mainnet`.
    pub network: String,
    /// Also return a BIP39 mnemonic.
    pub mnemonic: bool,
    /// Mnemonic length in words.
    pub word_count: u8,
    /// Optional BIP39 passphrase; empty for none.
    pub passphrase: String,
    /// BIP32 derivation path.
    pub path: String,
}

impl Default for CreateWallet {
    fn default() -> Self {
        Self {
            network: DEFAULT_NETWORK.to_owned(),
            mnemonic: false,
            word_count: 12,
            passphrase: String::new(),
            path: DEFAULT_DERIVATION_PATH.to_owned(),
        }
    }
}

/// Body of `POST /wallet/restore`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RestoreWallet {
    /// BIP39 phrase of 12 to 24 words.
    pub mnemonic: String,
    /// Network name, for example `mainnet`.
    pub network: String,
    /// BIP39 passphrase used when the wallet was created.
    pub passphrase: String,
    /// BIP32 derivation path.
    pub path: String,
}

impl RestoreWallet {
    /// Restore request for `mnemonic_phrase` with default network and path.
    pub fn new(mnemonic_phrase: impl Into<String>) -> Self {
        Self {
            mnemonic: mnemonic_phrase.into(),
            network: DEFAULT_NETWORK.to_owned(),
            passphrase: String::new(),
            path: DEFAULT_DERIVATION_PATH.to_owned(),
        }
    }
}

/// Hashes committed to by an inference proof.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InferenceProof {
    /// Hash of the model weights.
    pub model_hash: String,
    /// Hash of the inference input.
    pub input_hash: String,
    /// Inference output, hex encoded.
    pub output_hex: String,
}

#[derive(Serialize)]
pub(crate) struct InferenceVerification<'a> {
    #[serde(flatten)]
    pub proof: &'a InferenceProof,
    pub commitment: &'a str,
}

/// Body of `POST /identity/profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AgentProfile {
    /// Agent's Radiant address.
    pub address: String,
    pub description: String,
    /// Capability tags, for example `translate`.
    pub capabilities: Vec<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub pricing: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub wave_name: Option<String>,
}

impl AgentProfile {
    /// Profile with the required fields set and no optional ones.
    pub fn new(
        address: impl Into<String>,
        description: impl Into<String>,
        capabilities: Vec<String>,
    ) -> Self {
        Self {
            address: address.into(),
            description: description.into(),
            capabilities,
            ..Self::default()
        }
    }
}

/// Body of `POST /channel/open`; also the fixed part of a channel update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChannelOpen {
    pub channel_id: String,
    /// Paying agent's address.
    pub agent_a: String,
    /// Receiving agent's address.
    pub agent_b: String,
    /// Total funds locked in the channel.
    pub capacity: u64,
    /// Blocks until the channel times out.
    pub timeout_blocks: u32,
}

impl ChannelOpen {
    /// Channel of `capacity` between two agents, with the default timeout.
    pub fn new(
        channel_id: impl Into<String>,
        agent_a: impl Into<String>,
        agent_b: impl Into<String>,
        capacity: u64,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            agent_a: agent_a.into(),
            agent_b: agent_b.into(),
            capacity,
            timeout_blocks: DEFAULT_CHANNEL_TIMEOUT_BLOCKS,
        }
    }
}

/// Body of `POST /channel/update`: a transfer of `payment_amount` from A to B.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChannelUpdate {
    #[serde(flatten)]
    pub channel: ChannelOpen,
    /// Agent A's current balance.
    pub balance_a: u64,
    /// Agent B's current balance.
    pub balance_b: u64,
    pub payment_amount: u64,
    /// Update sequence number.
    pub nonce: u64,
}

/// Body of `POST /marketplace/asset`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DataAsset {
    #[serde(rename = "ref")]
    pub token_ref: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub name: String,
    /// Hash of the asset content.
    pub content_hash: String,
    /// Asking price; 0 for free assets.
    pub price: u64,
    #[serde(skip_serializing_if = "is_blank")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "is_blank")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub derived_from: Vec<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub license: Option<String>,
}

impl DataAsset {
    /// Free asset with only the required fields set.
    pub fn new(
        token_ref: impl Into<String>,
        asset_type: impl Into<String>,
        name: impl Into<String>,
        content_hash: impl Into<String>,
    ) -> Self {
        Self {
            token_ref: token_ref.into(),
            asset_type: asset_type.into(),
            name: name.into(),
            content_hash: content_hash.into(),
            ..Self::default()
        }
    }
}
