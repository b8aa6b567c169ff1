use reqwest::Method;
use serde_json::Value;

use crate::operations::{OPERATIONS, OperationDefinition, find_operation};
use crate::params::{
    AgentProfile, ChannelOpen, ChannelUpdate, CreateWallet, DataAsset, DataAssetSearch,
    InferenceProof, Page, RestoreWallet, TokenSearch,
};
use crate::{ApiClient, ApiRequest, BlockingApiClient, ClientConfig, ClientError, endpoints};

/// Async Radiant API client with one method per endpoint.
///
/// Every method returns the decoded response body unmodified. Clones share
/// one connection pool and may be used concurrently.
///
/// ```no_run
/// # async fn run() -> Result<(), radiant_client::ClientError> {
/// let client = radiant_client::RadiantClient::new("http://localhost:3080/api")?;
/// let info = client.get_chain_info().await?;
/// println!("{}", info["height"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct RadiantClient {
    inner: ApiClient,
}

impl RadiantClient {
    /// Creates a client with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            inner: ApiClient::new(base_url)?,
        })
    }

    /// Creates a client for a local server at [`crate::DEFAULT_BASE_URL`].
    pub fn from_default_server() -> Result<Self, ClientError> {
        Self::with_config(&ClientConfig::default())
    }

    /// Creates a client from a full configuration (timeout, headers).
    pub fn with_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            inner: ApiClient::with_config(config)?,
        })
    }

    /// Returns every operation in the endpoint catalog.
    pub fn operations() -> &'static [OperationDefinition] {
        OPERATIONS
    }

    /// Sends a request using a raw path and method.
    ///
    /// This bypasses the catalog but keeps the client configuration.
    pub async fn request<K, V>(
        &self,
        method: Method,
        path: &str,
        query: &[(K, V)],
        body: Option<Value>,
    ) -> Result<Value, ClientError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.inner.request(method, path, query, body).await
    }

    /// Calls an endpoint by operation id.
    ///
    /// `path_params` replaces `{param}` segments in the operation path template.
    /// Missing required parameters return
    /// [`ClientError::MissingPathParameter`].
    pub async fn call_operation(
        &self,
        operation_id: &str,
        path_params: &[(&str, &str)],
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        let request = catalog_request(operation_id, path_params, query, body)?;
        self.inner.send(request).await
    }

    // Blockchain

    /// Blockchain status (height, network, ticker).
    pub async fn get_chain_info(&self) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_chain_info()?).await
    }

    /// Block header at `height`.
    pub async fn get_block_header(&self, height: u64) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_block_header(height)?).await
    }

    /// Transaction details by txid.
    pub async fn get_transaction(&self, txid: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_transaction(txid)?).await
    }

    /// Verbose decode of a transaction.
    pub async fn decode_transaction(&self, txid: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::decode_transaction(txid)?).await
    }

    /// Broadcasts a signed raw transaction (hex).
    pub async fn broadcast_transaction(&self, raw_tx: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::broadcast_transaction(raw_tx)?).await
    }

    /// Fee estimate for confirmation within `blocks` blocks
    /// (server default [`DEFAULT_FEE_BLOCKS`](crate::params::DEFAULT_FEE_BLOCKS)).
    pub async fn estimate_fee(&self, blocks: u32) -> Result<Value, ClientError> {
        self.inner.send(endpoints::estimate_fee(blocks)?).await
    }

    // Address

    /// Confirmed and unconfirmed RXD balance of an address.
    pub async fn get_balance(&self, address: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_balance(address)?).await
    }

    /// Unspent outputs of an address.
    pub async fn get_utxos(&self, address: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_utxos(address)?).await
    }

    /// Transaction history of an address.
    pub async fn get_history(&self, address: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_history(address)?).await
    }

    /// Glyph tokens held by an address, at most `limit`
    /// (server default [`DEFAULT_PAGE_LIMIT`](crate::params::DEFAULT_PAGE_LIMIT)).
    pub async fn list_tokens(&self, address: &str, limit: u32) -> Result<Value, ClientError> {
        self.inner.send(endpoints::list_tokens(address, limit)?).await
    }

    // Glyph tokens

    /// Glyph token info by reference (`txid_vout`).
    pub async fn get_token(&self, token_ref: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_token(token_ref)?).await
    }

    /// Full CBOR metadata of a token.
    pub async fn get_token_metadata(&self, token_ref: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_token_metadata(token_ref)?).await
    }

    /// Transaction history of a token.
    pub async fn get_token_history(
        &self,
        token_ref: &str,
        page: Page,
    ) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_token_history(token_ref, page)?).await
    }

    /// Searches tokens by name or ticker.
    pub async fn search_tokens(&self, search: &TokenSearch) -> Result<Value, ClientError> {
        self.inner.send(endpoints::search_tokens(search)?).await
    }

    /// Tokens of one type (1=FT, 2=NFT, 3=DAT, 4=dMint, ...).
    pub async fn get_tokens_by_type(&self, type_id: u32, page: Page) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_tokens_by_type(type_id, page)?).await
    }

    // dMint

    /// Active dMint contracts in `format`
    /// (server default [`DEFAULT_DMINT_FORMAT`](crate::params::DEFAULT_DMINT_FORMAT)).
    pub async fn get_dmint_contracts(&self, format: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_dmint_contracts(format)?).await
    }

    /// dMint contract details by reference.
    pub async fn get_dmint_contract(&self, token_ref: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_dmint_contract(token_ref)?).await
    }

    /// dMint contracts mined with one algorithm (0=SHA256D, 1=BLAKE3, 2=K12).
    pub async fn get_dmint_by_algorithm(&self, algo_id: u32) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_dmint_by_algorithm(algo_id)?).await
    }

    /// dMint contracts ranked by reward/difficulty, at most `limit` (server default
    /// [`DEFAULT_PROFITABLE_DMINT_LIMIT`](crate::params::DEFAULT_PROFITABLE_DMINT_LIMIT)).
    pub async fn get_most_profitable_dmint(&self, limit: u32) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_most_profitable_dmint(limit)?).await
    }

    // WAVE naming

    /// Resolves a WAVE name to its zone records and owner.
    pub async fn resolve_wave_name(&self, name: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::resolve_wave_name(name)?).await
    }

    /// Whether a WAVE name can be registered.
    pub async fn check_wave_available(&self, name: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::check_wave_available(name)?).await
    }

    /// Subdomains of a WAVE name.
    pub async fn get_wave_subdomains(&self, name: &str, page: Page) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_wave_subdomains(name, page)?).await
    }

    /// WAVE naming system statistics.
    pub async fn get_wave_stats(&self) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_wave_stats()?).await
    }

    // Swap

    /// Open swap orders for a trading pair.
    pub async fn get_swap_orders(
        &self,
        sell: &str,
        buy: &str,
        page: Page,
    ) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_swap_orders(sell, buy, page)?).await
    }

    /// Trade history of a token.
    pub async fn get_swap_history(
        &self,
        token_ref: &str,
        page: Page,
    ) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_swap_history(token_ref, page)?).await
    }

    // Utility

    /// Validates an address and reports its type and scripthash.
    pub async fn validate_address(&self, address: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::validate_address(address)?).await
    }

    /// Glyph protocol type definitions.
    pub async fn get_protocol_info(&self) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_protocol_info()?).await
    }

    /// Indexer backend connection health.
    pub async fn get_health(&self) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_health()?).await
    }

    // Wallet

    /// Generates a new wallet, optionally with a BIP39 mnemonic.
    pub async fn create_wallet(&self, params: &CreateWallet) -> Result<Value, ClientError> {
        self.inner.send(endpoints::create_wallet(params)?).await
    }

    /// Restores a wallet from a BIP39 mnemonic (12-24 words).
    pub async fn restore_wallet(&self, params: &RestoreWallet) -> Result<Value, ClientError> {
        self.inner.send(endpoints::restore_wallet(params)?).await
    }

    // AI primitives

    /// Creates a blake3 inference proof commitment.
    pub async fn create_inference_proof(
        &self,
        proof: &InferenceProof,
    ) -> Result<Value, ClientError> {
        self.inner.send(endpoints::create_inference_proof(proof)?).await
    }

    /// Verifies an inference proof commitment.
    pub async fn verify_inference_proof(
        &self,
        proof: &InferenceProof,
        commitment: &str,
    ) -> Result<Value, ClientError> {
        self.inner.send(endpoints::verify_inference_proof(proof, commitment)?).await
    }

    /// Builds an AI agent identity profile.
    pub async fn build_agent_profile(&self, profile: &AgentProfile) -> Result<Value, ClientError> {
        self.inner.send(endpoints::build_agent_profile(profile)?).await
    }

    /// Resolves an AI agent identity from a WAVE name.
    pub async fn resolve_agent_identity(&self, name: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::resolve_agent_identity(name)?).await
    }

    /// Token-gated access check: does `address` hold at least `min_balance` of `token_ref`
    /// (server default [`DEFAULT_MIN_BALANCE`](crate::params::DEFAULT_MIN_BALANCE)).
    pub async fn check_token_access(
        &self,
        address: &str,
        token_ref: &str,
        min_balance: u64,
    ) -> Result<Value, ClientError> {
        self.inner.send(endpoints::check_token_access(address, token_ref, min_balance)?).await
    }

    /// Creates the initial state of a micropayment channel.
    pub async fn open_channel(&self, channel: &ChannelOpen) -> Result<Value, ClientError> {
        self.inner.send(endpoints::open_channel(channel)?).await
    }

    /// Applies a payment from agent A to agent B.
    pub async fn update_channel(&self, update: &ChannelUpdate) -> Result<Value, ClientError> {
        self.inner.send(endpoints::update_channel(update)?).await
    }

    /// Builds Glyph NFT metadata for a data marketplace asset.
    pub async fn build_data_asset(&self, asset: &DataAsset) -> Result<Value, ClientError> {
        self.inner.send(endpoints::build_data_asset(asset)?).await
    }

    /// Searches the data marketplace.
    pub async fn search_data_assets(&self, search: &DataAssetSearch) -> Result<Value, ClientError> {
        self.inner.send(endpoints::search_data_assets(search)?).await
    }
}

/// Blocking Radiant API client with one method per endpoint.
///
/// This is the synchronous counterpart of [`RadiantClient`]; each method
/// documents the same endpoint as its async twin.
#[derive(Clone, Debug)]
pub struct BlockingRadiantClient {
    inner: BlockingApiClient,
}

impl BlockingRadiantClient {
    /// Creates a client with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            inner: BlockingApiClient::new(base_url)?,
        })
    }

    /// Creates a client for a local server at [`crate::DEFAULT_BASE_URL`].
    pub fn from_default_server() -> Result<Self, ClientError> {
        Self::with_config(&ClientConfig::default())
    }

    /// Creates a client from a full configuration (timeout, headers).
    pub fn with_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            inner: BlockingApiClient::with_config(config)?,
        })
    }

    /// Returns every operation in the endpoint catalog.
    pub fn operations() -> &'static [OperationDefinition] {
        OPERATIONS
    }

    /// Sends a request using a raw path and method.
    pub fn request<K, V>(
        &self,
        method: Method,
        path: &str,
        query: &[(K, V)],
        body: Option<Value>,
    ) -> Result<Value, ClientError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.inner.request(method, path, query, body)
    }

    /// Calls an endpoint by operation id.
    pub fn call_operation(
        &self,
        operation_id: &str,
        path_params: &[(&str, &str)],
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        let request = catalog_request(operation_id, path_params, query, body)?;
        self.inner.send(request)
    }

    // Blockchain

    /// Blockchain status (height, network, ticker).
    pub fn get_chain_info(&self) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_chain_info()?)
    }

    /// Block header at `height`.
    pub fn get_block_header(&self, height: u64) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_block_header(height)?)
    }

    /// Transaction details by txid.
    pub fn get_transaction(&self, txid: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_transaction(txid)?)
    }

    /// Verbose decode of a transaction.
    pub fn decode_transaction(&self, txid: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::decode_transaction(txid)?)
    }

    /// Broadcasts a signed raw transaction (hex).
    pub fn broadcast_transaction(&self, raw_tx: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::broadcast_transaction(raw_tx)?)
    }

    /// Fee estimate for confirmation within `blocks` blocks
    /// (server default [`DEFAULT_FEE_BLOCKS`](crate::params::DEFAULT_FEE_BLOCKS)).
    pub fn estimate_fee(&self, blocks: u32) -> Result<Value, ClientError> {
        self.inner.send(endpoints::estimate_fee(blocks)?)
    }

    // Address

    /// Confirmed and unconfirmed RXD balance of an address.
    pub fn get_balance(&self, address: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_balance(address)?)
    }

    /// Unspent outputs of an address.
    pub fn get_utxos(&self, address: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_utxos(address)?)
    }

    /// Transaction history of an address.
    pub fn get_history(&self, address: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_history(address)?)
    }

    /// Glyph tokens held by an address, at most `limit`
    /// (server default [`DEFAULT_PAGE_LIMIT`](crate::params::DEFAULT_PAGE_LIMIT)).
    pub fn list_tokens(&self, address: &str, limit: u32) -> Result<Value, ClientError> {
        self.inner.send(endpoints::list_tokens(address, limit)?)
    }

    // Glyph tokens

    /// Glyph token info by reference (`txid_vout`).
    pub fn get_token(&self, token_ref: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_token(token_ref)?)
    }

    /// Full CBOR metadata of a token.
    pub fn get_token_metadata(&self, token_ref: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_token_metadata(token_ref)?)
    }

    /// Transaction history of a token.
    pub fn get_token_history(&self, token_ref: &str, page: Page) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_token_history(token_ref, page)?)
    }

    /// Searches tokens by name or ticker.
    pub fn search_tokens(&self, search: &TokenSearch) -> Result<Value, ClientError> {
        self.inner.send(endpoints::search_tokens(search)?)
    }

    /// Tokens of one type (1=FT, 2=NFT, 3=DAT, 4=dMint, ...).
    pub fn get_tokens_by_type(&self, type_id: u32, page: Page) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_tokens_by_type(type_id, page)?)
    }

    // dMint

    /// Active dMint contracts in `format`
    /// (server default [`DEFAULT_DMINT_FORMAT`](crate::params::DEFAULT_DMINT_FORMAT)).
    pub fn get_dmint_contracts(&self, format: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_dmint_contracts(format)?)
    }

    /// dMint contract details by reference.
    pub fn get_dmint_contract(&self, token_ref: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_dmint_contract(token_ref)?)
    }

    /// dMint contracts mined with one algorithm (0=SHA256D, 1=BLAKE3, 2=K12).
    pub fn get_dmint_by_algorithm(&self, algo_id: u32) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_dmint_by_algorithm(algo_id)?)
    }

    /// dMint contracts ranked by reward/difficulty, at most `limit` (server default
    /// [`DEFAULT_PROFITABLE_DMINT_LIMIT`](crate::params::DEFAULT_PROFITABLE_DMINT_LIMIT)).
    pub fn get_most_profitable_dmint(&self, limit: u32) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_most_profitable_dmint(limit)?)
    }

    // WAVE naming

    /// Resolves a WAVE name to its zone records and owner.
    pub fn resolve_wave_name(&self, name: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::resolve_wave_name(name)?)
    }

    /// Whether a WAVE name can be registered.
    pub fn check_wave_available(&self, name: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::check_wave_available(name)?)
    }

    /// Subdomains of a WAVE name.
    pub fn get_wave_subdomains(&self, name: &str, page: Page) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_wave_subdomains(name, page)?)
    }

    /// WAVE naming system statistics.
    pub fn get_wave_stats(&self) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_wave_stats()?)
    }

    // Swap

    /// Open swap orders for a trading pair.
    pub fn get_swap_orders(&self, sell: &str, buy: &str, page: Page) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_swap_orders(sell, buy, page)?)
    }

    /// Trade history of a token.
    pub fn get_swap_history(&self, token_ref: &str, page: Page) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_swap_history(token_ref, page)?)
    }

    // Utility

    /// Validates an address and reports its type and scripthash.
    pub fn validate_address(&self, address: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::validate_address(address)?)
    }

    /// Glyph protocol type definitions.
    pub fn get_protocol_info(&self) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_protocol_info()?)
    }

    /// Indexer backend connection health.
    pub fn get_health(&self) -> Result<Value, ClientError> {
        self.inner.send(endpoints::get_health()?)
    }

    // Wallet

    /// Generates a new wallet, optionally with a BIP39 mnemonic.
    pub fn create_wallet(&self, params: &CreateWallet) -> Result<Value, ClientError> {
        self.inner.send(endpoints::create_wallet(params)?)
    }

    /// Restores a wallet from a BIP39 mnemonic (12-24 words).
    pub fn restore_wallet(&self, params: &RestoreWallet) -> Result<Value, ClientError> {
        self.inner.send(endpoints::restore_wallet(params)?)
    }

    // AI primitives

    /// Creates a blake3 inference proof commitment.
    pub fn create_inference_proof(&self, proof: &InferenceProof) -> Result<Value, ClientError> {
        self.inner.send(endpoints::create_inference_proof(proof)?)
    }

    /// Verifies an inference proof commitment.
    pub fn verify_inference_proof(
        &self,
        proof: &InferenceProof,
        commitment: &str,
    ) -> Result<Value, ClientError> {
        self.inner.send(endpoints::verify_inference_proof(proof, commitment)?)
    }

    /// Builds an AI agent identity profile.
    pub fn build_agent_profile(&self, profile: &AgentProfile) -> Result<Value, ClientError> {
        self.inner.send(endpoints::build_agent_profile(profile)?)
    }

    /// Resolves an AI agent identity from a WAVE name.
    pub fn resolve_agent_identity(&self, name: &str) -> Result<Value, ClientError> {
        self.inner.send(endpoints::resolve_agent_identity(name)?)
    }

    /// Token-gated access check: does `address` hold at least `min_balance` of `token_ref`
    /// (server default [`DEFAULT_MIN_BALANCE`](crate::params::DEFAULT_MIN_BALANCE)).
    pub fn check_token_access(
        &self,
        address: &str,
        token_ref: &str,
        min_balance: u64,
    ) -> Result<Value, ClientError> {
        self.inner.send(endpoints::check_token_access(address, token_ref, min_balance)?)
    }

    /// Creates the initial state of a micropayment channel.
    pub fn open_channel(&self, channel: &ChannelOpen) -> Result<Value, ClientError> {
        self.inner.send(endpoints::open_channel(channel)?)
    }

    /// Applies a payment from agent A to agent B.
    pub fn update_channel(&self, update: &ChannelUpdate) -> Result<Value, ClientError> {
        self.inner.send(endpoints::update_channel(update)?)
    }

    /// Builds Glyph NFT metadata for a data marketplace asset.
    pub fn build_data_asset(&self, asset: &DataAsset) -> Result<Value, ClientError> {
        self.inner.send(endpoints::build_data_asset(asset)?)
    }

    /// Searches the data marketplace.
    pub fn search_data_assets(&self, search: &DataAssetSearch) -> Result<Value, ClientError> {
        self.inner.send(endpoints::search_data_assets(search)?)
    }
}

fn catalog_request(
    operation_id: &str,
    path_params: &[(&str, &str)],
    query: &[(&str, &str)],
    body: Option<Value>,
) -> Result<ApiRequest, ClientError> {
    let operation = find_operation(operation_id)?;
    let mut request = ApiRequest::new(operation, path_params)?;
    for (key, value) in query {
        request = request.query(key, value);
    }
    match body {
        Some(body) => request.json(&body),
        None => Ok(request),
    }
}
