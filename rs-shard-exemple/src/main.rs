use rs_shard_core::digest::Md5Digest;
use rs_shard_core::partition::analyzer::analyze;
use rs_shard_core::partition::summary::summarize;
use rs_shard_core::pattern::generator::{generate_many, generate_one};
use rs_shard_core::pattern::parser::compile;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Compile a restricted pattern once; the compiled pieces can be
    // sampled any number of times
    let pieces = compile(r"user-[a-f]{4}-\d{3}")?;
    println!("one sample: {}", generate_one(&pieces));

    // Generate a whole batch of synthetic partition keys
    // The count is clamped to 50000; negative counts yield nothing
    let keys = generate_many(r"user-[a-f]{4}-\d{3}", 2000)?;
    println!("generated {} keys", keys.len());

    // Map every key to one of 8 equal-width ranges of the 128-bit
    // keyspace (MD5 digest -> exact integer -> proportional range)
    let partition_count = 8;
    let records = analyze(&Md5Digest, &keys, partition_count)?;

    // A couple of concrete assignments
    for record in records.iter().take(3) {
        println!(
            "{} -> digest {} -> partition {}",
            record.key, record.digest, record.partition_index
        );
    }

    // Aggregate the batch into per-partition counts and statistics
    let indexes: Vec<u64> = records.iter().map(|r| r.partition_index).collect();
    let summary = summarize(partition_count, &indexes)?;

    println!("per-partition counts: {:?}", summary.per_partition_counts);
    println!(
        "busiest partition: {} with {} keys",
        summary.index_of_max_count, summary.max_count
    );
    println!(
        "average {:.1} keys/partition, standard deviation {:.2}",
        summary.average, summary.standard_deviation
    );

    // Invalid patterns are rejected with a typed error, for example
    // groups and alternation are out of the supported dialect
    match generate_many("(a|b)", 10) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("'(a|b)' rejected as expected: {e}"),
    }

    Ok(())
}
