use crate::error::{Error, Result};

/// Maps a 128-bit hash key to a partition index by proportional range
/// division of the keyspace.
///
/// The keyspace `[0, 2^128)` is divided into `partition_count`
/// equal-width half-open ranges and the returned index is the range
/// containing `hash_key`, i.e. `floor(hash_key * partition_count / 2^128)`.
/// The multiplication happens before the division, so no precision is
/// ever lost; the result is always `< partition_count`.
///
/// # Errors
/// Returns [`Error::InvalidPartitionCount`] if `partition_count` is 0.
///
/// # Notes
/// The 128x64-bit product can reach 192 bits, so it is formed through
/// 64-bit limbs and only its high 128 bits (the quotient by `2^128`)
/// are kept. Both limb products fit a `u128` because each factor is
/// at most 64 bits wide.
pub fn to_partition_index(hash_key: u128, partition_count: u64) -> Result<u64> {
	if partition_count == 0 {
		return Err(Error::InvalidPartitionCount(0));
	}

	let count = partition_count as u128;
	let high = (hash_key >> 64) * count;
	let low = (hash_key & u128::from(u64::MAX)) * count;

	// floor(hash_key * count / 2^128), carried limb by limb
	let index = (high + (low >> 64)) >> 64;

	Ok(index as u64)
}
