use serde::{Deserialize, Serialize};

use crate::digest::Digest128;
use crate::error::{Error, Result};
use crate::partition::hash_key::to_hash_key;
use crate::partition::mapper::to_partition_index;

/// The result of mapping one partition key.
///
/// Records are produced per analysis call and never persisted or
/// cached; the digest is recomputed on every call.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AssignmentRecord {
	/// The caller-supplied key, as given.
	pub key: String,
	/// 32-hex-character digest of the key.
	pub digest: String,
	/// The digest reinterpreted as an exact 128-bit integer.
	pub hash_key: u128,
	/// Index of the keyspace range containing `hash_key`.
	pub partition_index: u64,
}

/// Maps a list of keys to partitions, one record per input key.
///
/// Applies digest encoder, hash-key converter and partition mapper to
/// each key in order. The output preserves input order and duplicate
/// keys produce duplicate records.
///
/// # Errors
/// - [`Error::InvalidPartitionCount`] if `partition_count` is 0,
///   before any key is processed.
/// - Any per-key failure (e.g. a malformed digest from a faulty
///   encoder) aborts the whole batch; there is no partial-failure
///   recovery here, callers must catch at a higher layer.
pub fn analyze<D, S>(
	encoder: &D,
	keys: &[S],
	partition_count: u64,
) -> Result<Vec<AssignmentRecord>>
where
	D: Digest128,
	S: AsRef<str>,
{
	if partition_count == 0 {
		return Err(Error::InvalidPartitionCount(0));
	}

	let mut records = Vec::with_capacity(keys.len());
	for key in keys {
		let key = key.as_ref();
		let digest = encoder.digest128_hex(key);
		let hash_key = to_hash_key(&digest)?;
		let partition_index = to_partition_index(hash_key, partition_count)?;
		records.push(AssignmentRecord {
			key: key.to_owned(),
			digest,
			hash_key,
			partition_index,
		});
	}

	Ok(records)
}
