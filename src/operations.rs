//! Static catalog of Radiant API operations and path rendering.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Method;

use crate::ClientError;

/// Metadata for one Radiant API operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationDefinition {
    /// Stable operation identifier.
    pub operation_id: &'static str,
    /// Uppercase HTTP method (`GET` or `POST`).
    pub method: &'static str,
    /// Path template, potentially containing `{param}` placeholders.
    pub path_template: &'static str,
    /// Required path parameter names, in template order.
    pub path_params: &'static [&'static str],
}

/// Everything outside RFC 3986 `unreserved` is escaped, `/` included.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

macro_rules! operations {
    ($($name:ident = $id:literal, $method:literal, $path:literal, [$($param:literal),*];)*) => {
        $(
            pub const $name: OperationDefinition = OperationDefinition {
                operation_id: $id,
                method: $method,
                path_template: $path,
                path_params: &[$($param),*],
            };
        )*

        /// Every operation exposed by the Radiant API, grouped by subject area.
        pub const OPERATIONS: &[OperationDefinition] = &[$($name),*];
    };
}

operations! {
    // Blockchain
    GET_CHAIN_INFO = "getChainInfo", "GET", "/chain", [];
    GET_BLOCK_HEADER = "getBlockHeader", "GET", "/block/{height}", ["height"];
    GET_TRANSACTION = "getTransaction", "GET", "/tx/{txid}", ["txid"];
    DECODE_TRANSACTION = "decodeTransaction", "GET", "/tx/{txid}/decode", ["txid"];
    BROADCAST_TRANSACTION = "broadcastTransaction", "POST", "/tx", [];
    ESTIMATE_FEE = "estimateFee", "GET", "/fee", [];

    // Address
    GET_BALANCE = "getBalance", "GET", "/address/{address}/balance", ["address"];
    GET_UTXOS = "getUtxos", "GET", "/address/{address}/utxos", ["address"];
    GET_HISTORY = "getHistory", "GET", "/address/{address}/history", ["address"];
    LIST_TOKENS = "listTokens", "GET", "/address/{address}/tokens", ["address"];

    // Glyph tokens
    GET_TOKEN = "getToken", "GET", "/token/{ref}", ["ref"];
    GET_TOKEN_METADATA = "getTokenMetadata", "GET", "/token/{ref}/metadata", ["ref"];
    GET_TOKEN_HISTORY = "getTokenHistory", "GET", "/token/{ref}/history", ["ref"];
    SEARCH_TOKENS = "searchTokens", "GET", "/tokens/search", [];
    GET_TOKENS_BY_TYPE = "getTokensByType", "GET", "/tokens/type/{type_id}", ["type_id"];

    // dMint
    GET_DMINT_CONTRACTS = "getDmintContracts", "GET", "/dmint/contracts", [];
    GET_DMINT_CONTRACT = "getDmintContract", "GET", "/dmint/contract/{ref}", ["ref"];
    GET_DMINT_BY_ALGORITHM = "getDmintByAlgorithm", "GET", "/dmint/algorithm/{algo_id}",
        ["algo_id"];
    GET_MOST_PROFITABLE_DMINT = "getMostProfitableDmint", "GET", "/dmint/profitable", [];

    // WAVE naming
    RESOLVE_WAVE_NAME = "resolveWaveName", "GET", "/wave/resolve/{name}", ["name"];
    CHECK_WAVE_AVAILABLE = "checkWaveAvailable", "GET", "/wave/available/{name}", ["name"];
    GET_WAVE_SUBDOMAINS = "getWaveSubdomains", "GET", "/wave/{name}/subdomains", ["name"];
    GET_WAVE_STATS = "getWaveStats", "GET", "/wave/stats", [];

    // Swap
    GET_SWAP_ORDERS = "getSwapOrders", "GET", "/swap/orders", [];
    GET_SWAP_HISTORY = "getSwapHistory", "GET", "/swap/history", [];

    // Utility
    VALIDATE_ADDRESS = "validateAddress", "GET", "/validate/{address}", ["address"];
    GET_PROTOCOL_INFO = "getProtocolInfo", "GET", "/protocols", [];
    GET_HEALTH = "getHealth", "GET", "/health", [];

    // Wallet
    CREATE_WALLET = "createWallet", "POST", "/wallet/create", [];
    RESTORE_WALLET = "restoreWallet", "POST", "/wallet/restore", [];

    // AI primitives
    CREATE_INFERENCE_PROOF = "createInferenceProof", "POST", "/inference/proof", [];
    VERIFY_INFERENCE_PROOF = "verifyInferenceProof", "POST", "/inference/verify", [];
    BUILD_AGENT_PROFILE = "buildAgentProfile", "POST", "/identity/profile", [];
    RESOLVE_AGENT_IDENTITY = "resolveAgentIdentity", "GET", "/identity/resolve/{name}", ["name"];
    CHECK_TOKEN_ACCESS = "checkTokenAccess", "GET", "/access/check/{address}/{token_ref}",
        ["address", "token_ref"];
    OPEN_CHANNEL = "openChannel", "POST", "/channel/open", [];
    UPDATE_CHANNEL = "updateChannel", "POST", "/channel/update", [];
    BUILD_DATA_ASSET = "buildDataAsset", "POST", "/marketplace/asset", [];
    SEARCH_DATA_ASSETS = "searchDataAssets", "GET", "/marketplace/search", [];
}

pub(crate) fn find_operation(
    operation_id: &str,
) -> Result<&'static OperationDefinition, ClientError> {
    OPERATIONS
        .iter()
        .find(|op| op.operation_id == operation_id)
        .ok_or_else(|| ClientError::UnknownOperation(operation_id.to_owned()))
}

pub(crate) fn parse_method(operation: &OperationDefinition) -> Result<Method, ClientError> {
    Method::from_bytes(operation.method.as_bytes())
        .map_err(|_| ClientError::UnknownOperation(operation.operation_id.to_owned()))
}

/// Substitutes `{param}` placeholders with percent-encoded values.
///
/// `.` and `..` survive encoding and would be resolved as dot segments, so
/// they are rejected with [`ClientError::InvalidPath`].
pub(crate) fn render_path(
    operation: &OperationDefinition,
    path_params: &[(&str, &str)],
) -> Result<String, ClientError> {
    let mut rendered = operation.path_template.to_owned();

    for required_param in operation.path_params {
        let value = path_params
            .iter()
            .find(|(name, _)| name == required_param)
            .map(|(_, value)| *value)
            .ok_or_else(|| ClientError::MissingPathParameter {
                operation_id: operation.operation_id.to_owned(),
                parameter: (*required_param).to_owned(),
            })?;

        let placeholder = format!("{{{required_param}}}");
        if value == "." || value == ".." {
            return Err(ClientError::InvalidPath(rendered.replace(&placeholder, value)));
        }

        rendered = rendered.replace(&placeholder, &encode_path_segment(value));
    }

    Ok(rendered)
}

pub(crate) fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}
