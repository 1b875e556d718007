use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Acknowledgment for a fulfilled order. No durable order record exists;
/// the count is echoed back so clients can sanity-check the batch size.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderPlacedResponse {
    pub items_processed: usize,
}
