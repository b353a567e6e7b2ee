//! Client-side book identifiers.

use chrono::Utc;
use uuid::Uuid;

/// Spread of the random offset added to the millisecond timestamp.
const RANDOM_SPAN: u64 = 1000;

/// Generate an identifier for a new book.
///
/// The value is the current Unix time in milliseconds scaled by
/// [`RANDOM_SPAN`] plus a random offset below it. Two adds in the same
/// millisecond collide only when the offsets match. Not monotonic.
pub fn generate_book_id() -> u64 {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let offset = (Uuid::new_v4().as_u128() % RANDOM_SPAN as u128) as u64;
    millis * RANDOM_SPAN + offset
}
