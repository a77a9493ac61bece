use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};
use tracing::{error, info};

use crate::{adapters::ObjectStore, model, util};

/// Processes one batch of object-creation notifications. Each qualifying
/// record is fetched, turned into a grayscale 200x200 JPEG and stored in
/// the same bucket under its derived `thumbnails/` key. The first failure
/// aborts the rest of the batch; earlier uploads stay in place.
pub async fn handle_event<S: ObjectStore>(
    event: LambdaEvent<S3Event>,
    store: &S,
) -> Result<(), Error> {
    let records = event.payload.records;
    let count = records.len();

    for record in records {
        let bucket = record
            .s3
            .bucket
            .name
            .ok_or_else(|| model::error::ThumbError {
                message: "record is missing a bucket name".to_string(),
            })?;
        let key = record.s3.object.key.ok_or_else(|| model::error::ThumbError {
            message: "record is missing an object key".to_string(),
        })?;

        info!(bucket = bucket.as_str(), key = key.as_str(), "processing record");

        if !util::key::is_supported_image(&key) {
            info!(key = key.as_str(), "unsupported extension, skipping");
            continue;
        }

        let source = match store.download_object(&bucket, &key).await {
            Ok(body) => body,
            Err(err) => {
                error!(
                    bucket = bucket.as_str(),
                    key = key.as_str(),
                    error = %err,
                    "failed to fetch source object"
                );
                return Err(err.into());
            }
        };

        let thumb = match util::image::to_thumbnail(&source) {
            Ok(thumb) => thumb,
            Err(err) => {
                error!(
                    bucket = bucket.as_str(),
                    key = key.as_str(),
                    error = %err,
                    "failed to build thumbnail"
                );
                return Err(err.into());
            }
        };

        let thumbnail_key = match util::key::derive_thumbnail_key(&key) {
            Some(thumbnail_key) => thumbnail_key,
            // keys shaped like "a/b.jpg" have no destination; dropped
            // without logging
            None => continue,
        };

        info!(
            bucket = bucket.as_str(),
            key = key.as_str(),
            thumbnail_key = thumbnail_key.as_str(),
            "storing thumbnail"
        );

        if let Err(err) = store.upload_object(&bucket, &thumbnail_key, thumb).await {
            error!(
                bucket = bucket.as_str(),
                key = thumbnail_key.as_str(),
                error = %err,
                "failed to store thumbnail"
            );
            return Err(err.into());
        }
    }

    info!(records = count, "processed batch");

    Ok(())
}
