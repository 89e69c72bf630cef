//! Semantic movie search demo CLI.
//!
//! Embeds three movie plots with Bedrock Titan, stores them in an S3 Vectors
//! index, and runs a filtered top-K similarity query against it.

use clap::Parser;
use s3vec::config::{self, SearchConfig};
use s3vec::corpus;
use s3vec::demo::{self, DemoOptions};
use s3vec::embeddings::TitanEmbedder;
use s3vec::store::S3VectorStore;
use tracing_subscriber::EnvFilter;

/// Semantic movie search demo over Bedrock Titan embeddings and S3 Vectors
#[derive(Parser)]
#[command(name = "s3vec")]
#[command(about = "Semantic movie search demo over Bedrock Titan embeddings and S3 Vectors", long_about = None)]
#[command(version)]
struct Cli {
    /// Vector bucket name (falls back to S3_VECTOR_BUCKET)
    #[arg(long)]
    bucket: Option<String>,

    /// Vector index name (falls back to S3_VECTOR_INDEX)
    #[arg(long)]
    index: Option<String>,

    /// AWS region for the Bedrock and S3 Vectors clients
    #[arg(long, env = "AWS_REGION", default_value = config::DEFAULT_REGION)]
    region: String,

    /// Bedrock embedding model id
    #[arg(long, env = "BEDROCK_EMBED_MODEL", default_value = config::DEFAULT_MODEL_ID)]
    model_id: String,

    /// Number of nearest neighbors to return
    #[arg(long, default_value = "3")]
    top_k: usize,

    /// Exact-match genre filter for the query
    #[arg(long, default_value = corpus::DEFAULT_GENRE)]
    genre: String,

    /// Query the whole index without a metadata filter
    #[arg(long)]
    no_filter: bool,
}

fn print_usage() {
    println!("Usage: s3vec --bucket <bucket_name> --index <index_name>");
    println!("Or set the S3_VECTOR_BUCKET and S3_VECTOR_INDEX environment variables.");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Resolve required config before touching any AWS client
    let config = match SearchConfig::resolve(cli.bucket, cli.index) {
        Ok(config) => config,
        Err(err) => {
            println!("Error: {}", err);
            print_usage();
            std::process::exit(1);
        }
    };

    let aws_config = aws_config::from_env()
        .region(aws_config::Region::new(cli.region))
        .load()
        .await;

    let embedder = TitanEmbedder::new(
        aws_sdk_bedrockruntime::Client::new(&aws_config),
        cli.model_id,
    );
    let store = S3VectorStore::new(
        aws_sdk_s3vectors::Client::new(&aws_config),
        config.bucket,
        config.index,
    );

    let options = DemoOptions {
        top_k: cli.top_k,
        genre: if cli.no_filter { None } else { Some(cli.genre) },
    };

    let matches = demo::run(&embedder, &store, &options).await?;

    println!("Query: {}", corpus::QUERY_TEXT);
    println!("✓ {} matches", matches.len());
    for matched in &matches {
        match matched.distance {
            Some(distance) => println!("  {} (distance: {:.4})", matched.key, distance),
            None => println!("  {}", matched.key),
        }
        if let Some(metadata) = &matched.metadata {
            println!("    {}", serde_json::to_string(metadata)?);
        }
    }

    Ok(())
}
