//! Request builders for every catalog operation.
//!
//! Each function shapes one [`ApiRequest`]; [`crate::RadiantClient`] and
//! [`crate::BlockingRadiantClient`] send them. Keeping the shaping here lets
//! both clients share it and lets it be tested without a server. Builder docs
//! describe what the server answers to the request.

use serde_json::json;

use crate::ClientError;
use crate::operations as op;
use crate::params::{
    AgentProfile, ChannelOpen, ChannelUpdate, CreateWallet, DataAsset, DataAssetSearch,
    InferenceProof, InferenceVerification, Page, RestoreWallet, TokenSearch,
};
use crate::request::ApiRequest;

type Built = Result<ApiRequest, ClientError>;

fn paged(request: ApiRequest, page: Page) -> ApiRequest {
    request.query("limit", page.limit).query("offset", page.offset)
}

// Blockchain

/// Blockchain status (height, network, ticker).
pub fn get_chain_info() -> Built {
    ApiRequest::new(&op::GET_CHAIN_INFO, &[])
}

/// Block header at `height`.
pub fn get_block_header(height: u64) -> Built {
    let height = height.to_string();
    ApiRequest::new(&op::GET_BLOCK_HEADER, &[("height", height.as_str())])
}

/// Transaction details by txid.
pub fn get_transaction(txid: &str) -> Built {
    ApiRequest::new(&op::GET_TRANSACTION, &[("txid", txid)])
}

/// Verbose decode of a transaction.
pub fn decode_transaction(txid: &str) -> Built {
    ApiRequest::new(&op::DECODE_TRANSACTION, &[("txid", txid)])
}

/// Broadcasts a signed raw transaction (hex).
pub fn broadcast_transaction(raw_tx: &str) -> Built {
    ApiRequest::new(&op::BROADCAST_TRANSACTION, &[])?.json(&json!({ "raw_tx": raw_tx }))
}

/// Fee estimate for confirmation within `blocks` blocks
/// (server default [`DEFAULT_FEE_BLOCKS`](crate::params::DEFAULT_FEE_BLOCKS)).
pub fn estimate_fee(blocks: u32) -> Built {
    Ok(ApiRequest::new(&op::ESTIMATE_FEE, &[])?.query("blocks", blocks))
}

// Address

/// Confirmed and unconfirmed RXD balance of an address.
pub fn get_balance(address: &str) -> Built {
    ApiRequest::new(&op::GET_BALANCE, &[("address", address)])
}

/// Unspent outputs of an address.
pub fn get_utxos(address: &str) -> Built {
    ApiRequest::new(&op::GET_UTXOS, &[("address", address)])
}

/// Transaction history of an address.
pub fn get_history(address: &str) -> Built {
    ApiRequest::new(&op::GET_HISTORY, &[("address", address)])
}

/// Glyph tokens held by an address, at most `limit`
/// (server default [`DEFAULT_PAGE_LIMIT`](crate::params::DEFAULT_PAGE_LIMIT)).
pub fn list_tokens(address: &str, limit: u32) -> Built {
    Ok(ApiRequest::new(&op::LIST_TOKENS, &[("address", address)])?.query("limit", limit))
}

// Glyph tokens

/// Glyph token info by reference (`txid_vout`).
pub fn get_token(token_ref: &str) -> Built {
    ApiRequest::new(&op::GET_TOKEN, &[("ref", token_ref)])
}

/// Full CBOR metadata of a token.
pub fn get_token_metadata(token_ref: &str) -> Built {
    ApiRequest::new(&op::GET_TOKEN_METADATA, &[("ref", token_ref)])
}

/// Transaction history of a token.
pub fn get_token_history(token_ref: &str, page: Page) -> Built {
    Ok(paged(
        ApiRequest::new(&op::GET_TOKEN_HISTORY, &[("ref", token_ref)])?,
        page,
    ))
}

/// Searches tokens by name or ticker.
pub fn search_tokens(search: &TokenSearch) -> Built {
    Ok(ApiRequest::new(&op::SEARCH_TOKENS, &[])?
        .query("q", &search.query)
        .query_opt("protocols", search.protocols.as_deref())
        .query("limit", search.limit))
}

/// Tokens of one type (1=FT, 2=NFT, 3=DAT, 4=dMint, ...).
pub fn get_tokens_by_type(type_id: u32, page: Page) -> Built {
    let type_id = type_id.to_string();
    Ok(paged(
        ApiRequest::new(&op::GET_TOKENS_BY_TYPE, &[("type_id", type_id.as_str())])?,
        page,
    ))
}

// dMint

/// Active dMint contracts in `format`
/// (server default [`DEFAULT_DMINT_FORMAT`](crate::params::DEFAULT_DMINT_FORMAT)).
pub fn get_dmint_contracts(format: &str) -> Built {
    Ok(ApiRequest::new(&op::GET_DMINT_CONTRACTS, &[])?.query("format", format))
}

/// dMint contract details by reference.
pub fn get_dmint_contract(token_ref: &str) -> Built {
    ApiRequest::new(&op::GET_DMINT_CONTRACT, &[("ref", token_ref)])
}

/// dMint contracts mined with one algorithm (0=SHA256D, 1=BLAKE3, 2=K12).
pub fn get_dmint_by_algorithm(algo_id: u32) -> Built {
    let algo_id = algo_id.to_string();
    ApiRequest::new(&op::GET_DMINT_BY_ALGORITHM, &[("algo_id", algo_id.as_str())])
}

/// dMint contracts ranked by reward/difficulty, at most `limit` (server default
/// [`DEFAULT_PROFITABLE_DMINT_LIMIT`](crate::params::DEFAULT_PROFITABLE_DMINT_LIMIT)).
pub fn get_most_profitable_dmint(limit: u32) -> Built {
    Ok(ApiRequest::new(&op::GET_MOST_PROFITABLE_DMINT, &[])?.query("limit", limit))
}

// WAVE naming

/// Resolves a WAVE name to its zone records and owner.
pub fn resolve_wave_name(name: &str) -> Built {
    ApiRequest::new(&op::RESOLVE_WAVE_NAME, &[("name", name)])
}

/// Whether a WAVE name can be registered.
pub fn check_wave_available(name: &str) -> Built {
    ApiRequest::new(&op::CHECK_WAVE_AVAILABLE, &[("name", name)])
}

/// Subdomains of a WAVE name.
pub fn get_wave_subdomains(name: &str, page: Page) -> Built {
    Ok(paged(
        ApiRequest::new(&op::GET_WAVE_SUBDOMAINS, &[("name", name)])?,
        page,
    ))
}

/// WAVE naming system statistics.
pub fn get_wave_stats() -> Built {
    ApiRequest::new(&op::GET_WAVE_STATS, &[])
}

// Swap

/// Open swap orders for a trading pair.
pub fn get_swap_orders(sell: &str, buy: &str, page: Page) -> Built {
    Ok(paged(
        ApiRequest::new(&op::GET_SWAP_ORDERS, &[])?
            .query("sell", sell)
            .query("buy", buy),
        page,
    ))
}

/// Trade history of a token.
pub fn get_swap_history(token_ref: &str, page: Page) -> Built {
    Ok(paged(
        ApiRequest::new(&op::GET_SWAP_HISTORY, &[])?.query("ref", token_ref),
        page,
    ))
}

// Utility

/// Validates an address and reports its type and scripthash.
pub fn validate_address(address: &str) -> Built {
    ApiRequest::new(&op::VALIDATE_ADDRESS, &[("address", address)])
}

/// Glyph protocol type definitions.
pub fn get_protocol_info() -> Built {
    ApiRequest::new(&op::GET_PROTOCOL_INFO, &[])
}

/// Indexer backend connection health.
pub fn get_health() -> Built {
    ApiRequest::new(&op::GET_HEALTH, &[])
}

// Wallet

/// Generates a new wallet, optionally with a BIP39 mnemonic.
pub fn create_wallet(params: &CreateWallet) -> Built {
    ApiRequest::new(&op::CREATE_WALLET, &[])?.json(params)
}

/// Restores a wallet from a BIP39 mnemonic (12-24 words).
pub fn restore_wallet(params: &RestoreWallet) -> Built {
    ApiRequest::new(&op::RESTORE_WALLET, &[])?.json(params)
}

// AI primitives

/// Creates a blake3 inference proof commitment.
pub fn create_inference_proof(proof: &InferenceProof) -> Built {
    ApiRequest::new(&op::CREATE_INFERENCE_PROOF, &[])?.json(proof)
}

/// Verifies an inference proof commitment.
pub fn verify_inference_proof(proof: &InferenceProof, commitment: &str) -> Built {
    ApiRequest::new(&op::VERIFY_INFERENCE_PROOF, &[])?
        .json(&InferenceVerification { proof, commitment })
}

/// Builds an AI agent identity profile.
pub fn build_agent_profile(profile: &AgentProfile) -> Built {
    ApiRequest::new(&op::BUILD_AGENT_PROFILE, &[])?.json(profile)
}

/// Resolves an AI agent identity from a WAVE name.
pub fn resolve_agent_identity(name: &str) -> Built {
    ApiRequest::new(&op::RESOLVE_AGENT_IDENTITY, &[("name", name)])
}

/// Token-gated access check: does `address` hold at least `min_balance` of `token_ref`
/// (server default [`DEFAULT_MIN_BALANCE`](crate::params::DEFAULT_MIN_BALANCE)).
pub fn check_token_access(address: &str, token_ref: &str, min_balance: u64) -> Built {
    Ok(ApiRequest::new(
        &op::CHECK_TOKEN_ACCESS,
        &[("address", address), ("token_ref", token_ref)],
    )?
    .query("min_balance", min_balance))
}

/// Creates the initial state of a micropayment channel.
pub fn open_channel(channel: &ChannelOpen) -> Built {
    ApiRequest::new(&op::OPEN_CHANNEL, &[])?.json(channel)
}

/// Applies a payment from agent A to agent B.
pub fn update_channel(update: &ChannelUpdate) -> Built {
    ApiRequest::new(&op::UPDATE_CHANNEL, &[])?.json(update)
}

/// Builds Glyph NFT metadata for a data marketplace asset.
pub fn build_data_asset(asset: &DataAsset) -> Built {
    ApiRequest::new(&op::BUILD_DATA_ASSET, &[])?.json(asset)
}

/// Searches the data marketplace.
pub fn search_data_assets(search: &DataAssetSearch) -> Built {
    Ok(ApiRequest::new(&op::SEARCH_DATA_ASSETS, &[])?
        .query("q", &search.query)
        .query_opt("type", search.asset_type.as_deref())
        .query("limit", search.limit))
}
