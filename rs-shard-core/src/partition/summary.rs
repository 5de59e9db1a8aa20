use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Per-partition counts and summary statistics for one batch of
/// partition indexes.
///
/// Fully recomputed on every call; there is no incremental update.
///
/// # Invariants
/// - `per_partition_counts.len() == partition_count`
/// - `per_partition_counts` sums to `total_keys` whenever every input
///   index was in range
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DistributionSummary {
	/// Number of equal-width ranges dividing the keyspace.
	pub partition_count: u64,
	/// Number of indexes in the batch, in-range or not.
	pub total_keys: usize,
	/// Keys observed per partition, indexed by partition.
	pub per_partition_counts: Vec<u64>,
	/// Highest per-partition count.
	pub max_count: u64,
	/// Lowest partition index achieving `max_count`.
	pub index_of_max_count: u64,
	/// `total_keys / partition_count`.
	pub average: f64,
	/// Population standard deviation of the counts around `average`,
	/// taken over all partitions including empty ones.
	pub standard_deviation: f64,
}

/// Aggregates a batch of partition indexes into a [`DistributionSummary`].
///
/// Indexes outside `[0, partition_count)` are silently skipped rather
/// than reported: they cannot occur when the indexes come from
/// [`to_partition_index`](crate::partition::mapper::to_partition_index),
/// so dropping them is a deliberate no-op rather than an error path.
/// They still count toward `total_keys`.
///
/// The max scan keeps the first partition achieving a strictly greater
/// count than anything before it, so ties break toward the lowest index.
///
/// # Errors
/// Returns [`Error::InvalidPartitionCount`] if `partition_count` is 0.
/// Upstream validation means this cannot happen on the composed path.
pub fn summarize(partition_count: u64, indexes: &[u64]) -> Result<DistributionSummary> {
	if partition_count == 0 {
		return Err(Error::InvalidPartitionCount(0));
	}

	let mut counts = vec![0u64; partition_count as usize];
	for &index in indexes {
		if let Some(count) = counts.get_mut(index as usize) {
			*count += 1;
		}
	}

	let mut max_count = 0u64;
	let mut index_of_max_count = 0u64;
	for (index, &count) in counts.iter().enumerate() {
		if count > max_count {
			max_count = count;
			index_of_max_count = index as u64;
		}
	}

	let total_keys = indexes.len();
	let average = total_keys as f64 / partition_count as f64;

	// Population variance over all buckets, empty ones included
	let variance = counts
		.iter()
		.map(|&count| {
			let deviation = count as f64 - average;
			deviation * deviation
		})
		.sum::<f64>()
		/ partition_count as f64;

	Ok(DistributionSummary {
		partition_count,
		total_keys,
		per_partition_counts: counts,
		max_count,
		index_of_max_count,
		average,
		standard_deviation: variance.sqrt(),
	})
}
