//! End-to-end tests: pattern generation feeding the partition analyzer.

use rs_shard_core::digest::{Digest128, Md5Digest};
use rs_shard_core::partition::analyzer::analyze;
use rs_shard_core::partition::hash_key::to_hash_key;
use rs_shard_core::partition::mapper::to_partition_index;
use rs_shard_core::partition::summary::summarize;
use rs_shard_core::pattern::generator::generate_many;

#[test]
fn generated_keys_flow_through_analysis_and_summary() {
	let keys = generate_many(r"user-\d{4}", 500).unwrap();
	assert_eq!(keys.len(), 500);

	let partition_count = 8;
	let records = analyze(&Md5Digest, &keys, partition_count).unwrap();
	assert_eq!(records.len(), keys.len());

	let indexes: Vec<u64> = records.iter().map(|r| r.partition_index).collect();
	let summary = summarize(partition_count, &indexes).unwrap();

	let total: u64 = summary.per_partition_counts.iter().sum();
	assert_eq!(total as usize, keys.len());
	assert_eq!(summary.total_keys, keys.len());
	assert_eq!(summary.partition_count, partition_count);
	assert!(summary.max_count >= total / partition_count);
	assert!((summary.index_of_max_count) < partition_count);
}

#[test]
fn records_agree_with_the_standalone_converters() {
	let keys = ["alpha", "beta", "gamma", "alpha"];
	let records = analyze(&Md5Digest, &keys, 16).unwrap();

	for record in &records {
		assert_eq!(record.digest, Md5Digest.digest128_hex(&record.key));
		assert_eq!(record.hash_key, to_hash_key(&record.digest).unwrap());
		assert_eq!(
			record.partition_index,
			to_partition_index(record.hash_key, 16).unwrap()
		);
	}
}

#[test]
fn keyspace_extremes_land_on_the_first_and_last_partition() {
	assert_eq!(
		to_partition_index(
			to_hash_key("00000000000000000000000000000000").unwrap(),
			8
		),
		Ok(0)
	);
	assert_eq!(
		to_partition_index(
			to_hash_key("ffffffffffffffffffffffffffffffff").unwrap(),
			8
		),
		Ok(7)
	);
}

#[test]
fn many_partitions_spread_many_keys() {
	// With 2000 random keys over 4 partitions, an empty partition would
	// point at a broken mapping, not bad luck.
	let keys = generate_many(r"[a-z]{12}", 2000).unwrap();
	let records = analyze(&Md5Digest, &keys, 4).unwrap();
	let indexes: Vec<u64> = records.iter().map(|r| r.partition_index).collect();
	let summary = summarize(4, &indexes).unwrap();

	assert!(summary.per_partition_counts.iter().all(|&c| c > 0));
}
