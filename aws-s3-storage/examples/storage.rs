/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use aws_s3_storage::config::{Credentials, Environment};
use aws_s3_storage::data_source::DataSource;
use aws_s3_storage::types::StoredObject;
use clap::Parser;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "storage")]
#[command(about = "Runs bucket and object operations against Amazon S3.")]
pub struct Args {
    #[command(subcommand)]
    command: Command,

    /// Region to use, overrides the `AWSRegion` setting
    #[arg(long)]
    region: Option<String>,

    /// Custom endpoint, e.g. a local S3 compatible server
    #[arg(long)]
    endpoint_url: Option<String>,

    /// Address buckets as a path segment instead of a host name
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    path_style: bool,

    /// Per-call timeout in seconds, 0 disables the timeout
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Subcommand)]
enum Command {
    /// List every bucket owned by the credentials
    ListBuckets {
        /// Only list buckets beginning with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Create a bucket
    CreateBucket { bucket: String },
    /// Delete a bucket
    DeleteBucket {
        bucket: String,
        /// Delete every object in the bucket first
        #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
        force: bool,
    },
    /// Upload an object from a local file or an inline string
    Put {
        bucket: String,
        key: String,
        /// Local file to upload
        #[arg(long, conflicts_with = "data")]
        file: Option<PathBuf>,
        /// Inline content to upload
        #[arg(long)]
        data: Option<String>,
        /// Title stored as object metadata
        #[arg(long)]
        title: Option<String>,
    },
    /// Download an object, printing it or saving it to a local file
    Get {
        bucket: String,
        key: String,
        /// Local file to write the object to
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Delete an object
    Delete { bucket: String, key: String },
    /// List the objects in a bucket
    Ls {
        bucket: String,
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Fetch several objects, reporting which could not be read
    FetchMany { bucket: String, keys: Vec<String> },
    /// Store the demo payload under several keys
    StoreMany {
        bucket: String,
        keys: Vec<String>,
        /// Title stored with every object
        #[arg(long)]
        title: Option<String>,
    },
}

async fn client(args: &Args) -> aws_s3_storage::Client {
    let mut loader = aws_s3_storage::from_env()
        .force_path_style(args.path_style)
        .operation_timeout((args.timeout_secs > 0).then(|| Duration::from_secs(args.timeout_secs)));

    match Credentials::from_settings(&Environment) {
        Ok(credentials) => loader = loader.credentials(credentials),
        Err(err) => tracing::debug!("using the default credentials chain: {err}"),
    }
    if let Some(region) = &args.region {
        loader = loader.region(region);
    }
    if let Some(endpoint_url) = &args.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }

    aws_s3_storage::Client::new(loader.load().await)
}

async fn run(client: aws_s3_storage::Client, command: Command) -> Result<(), BoxError> {
    match command {
        Command::ListBuckets { prefix } => {
            let output = client.list_buckets().set_prefix(prefix).send().await?;
            for bucket in output.buckets() {
                println!("{}", bucket.name());
            }
        }
        Command::CreateBucket { bucket } => {
            let output = client.create_bucket().bucket(&bucket).send().await?;
            println!("created {bucket} at {}", output.location().unwrap_or("-"));
        }
        Command::DeleteBucket { bucket, force } => {
            let output = client
                .delete_bucket()
                .bucket(&bucket)
                .force(force)
                .send()
                .await?;
            println!(
                "deleted {bucket} ({} objects removed)",
                output.objects_deleted()
            );
        }
        Command::Put {
            bucket,
            key,
            file,
            data,
            title,
        } => {
            let mut request = client.put_object().bucket(&bucket).key(&key);
            request = match (file, data) {
                (Some(path), _) => request.body_from_path(path),
                (None, Some(data)) => request.body(data),
                (None, None) => return Err("either --file or --data is required".into()),
            };
            if let Some(title) = title {
                request = request.title(title);
            }
            let output = request.send().await?;
            println!(
                "uploaded {} bytes to s3://{bucket}/{key} (etag {})",
                output.content_length(),
                output.e_tag().unwrap_or("-")
            );
        }
        Command::Get { bucket, key, out } => {
            let object = client.get_object().bucket(&bucket).key(&key).send().await?;
            match out {
                Some(path) => {
                    object.write_to(&path).await?;
                    println!("saved {} bytes to {}", object.body().len(), path.display());
                }
                None => {
                    if let Some(title) = object.title() {
                        println!("title: {title}");
                    }
                    println!("{}", String::from_utf8_lossy(object.body()));
                }
            }
        }
        Command::Delete { bucket, key } => {
            client.delete_object().bucket(&bucket).key(&key).send().await?;
            println!("deleted s3://{bucket}/{key}");
        }
        Command::Ls { bucket, prefix } => {
            let mut objects = client
                .list_objects()
                .bucket(&bucket)
                .set_prefix(prefix)
                .into_stream()?;
            while let Some(object) = objects.next().await {
                let object = object?;
                println!("{:>12} {}", object.size(), object.key());
            }
        }
        Command::FetchMany { bucket, keys } => {
            let data_source = DataSource::new(client);
            let results = data_source.fetch_many(&bucket, &keys).await;
            for (key, result) in keys.iter().zip(results) {
                match result {
                    Some(body) => println!("{key}: {} bytes", body.len()),
                    None => println!("{key}: absent"),
                }
            }
        }
        Command::StoreMany { bucket, keys, title } => {
            let mut data_source = DataSource::new(client);
            if let Some(title) = title {
                let content = data_source.content().content().clone();
                data_source = data_source.with_content(StoredObject::new(content).with_title(title));
            }
            let stored = data_source.store_many(&bucket, &keys).await;
            println!("stored {} keys: {}", keys.len(), if stored { "ok" } else { "failed" });
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    let client = client(&args).await;
    let start = std::time::Instant::now();
    let result = run(client.clone(), args.command).await;
    tracing::debug!(
        "finished in {:?}, {} requests sent, {} failed",
        start.elapsed(),
        client.metrics().requests_sent(),
        client.metrics().requests_failed()
    );
    result
}
