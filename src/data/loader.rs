use crate::data::error::{ExtractError, LoadError};
use crate::data::extractor::{extract_hours, extract_rows, rows_to_frame};
use crate::data::source::{DataSource, Granularity};
use crate::types::frames::daily_frame::DailyFrame;
use crate::types::frames::hourly_frame::HourlyFrame;
use async_compression::tokio::bufread::GzipDecoder;
use futures_util::TryStreamExt;
use log::{info, warn};
use polars::prelude::*;
use reqwest::Client;
use std::io::Cursor;
use tokio::io::{AsyncBufRead, AsyncRead, AsyncReadExt, BufReader};
use tokio::{fs, task};
use tokio_util::io::StreamReader;

type SourceReader = Box<dyn AsyncBufRead + Unpin + Send>;

/// Fetches a rental dataset and turns it into a validated canonical frame.
pub(crate) struct DatasetLoader {
    download_client: Client,
    max_download_bytes: u64,
}

impl DatasetLoader {
    pub(crate) fn new(max_download_bytes: u64) -> DatasetLoader {
        DatasetLoader {
            download_client: Client::new(),
            max_download_bytes,
        }
    }

    pub(crate) async fn load_daily(&self, source: &DataSource) -> Result<DailyFrame, LoadError> {
        let frame = self.load_frame(Granularity::Daily, source).await?;
        Ok(DailyFrame::new(frame))
    }

    pub(crate) async fn load_hourly(&self, source: &DataSource) -> Result<HourlyFrame, LoadError> {
        let frame = self.load_frame(Granularity::Hourly, source).await?;
        Ok(HourlyFrame::new(frame))
    }

    /// Reads, parses and validates one dataset.
    async fn load_frame(
        &self,
        granularity: Granularity,
        source: &DataSource,
    ) -> Result<DataFrame, LoadError> {
        info!("Loading {} rentals from {}", granularity, source);
        let raw_bytes = self.read_source(source).await?;
        let df = Self::csv_to_dataframe(raw_bytes, granularity).await?;
        info!("Loaded {} {} rows from {}", df.height(), granularity, source);
        Ok(df)
    }

    /// Reads the whole source into memory, gunzipping `.gz` locations and enforcing the size cap.
    async fn read_source(&self, source: &DataSource) -> Result<Vec<u8>, LoadError> {
        let buffered: SourceReader = match source {
            DataSource::Remote(url) => self.open_remote(url).await?,
            DataSource::File(path) => {
                let file = fs::File::open(path)
                    .await
                    .map_err(|e| LoadError::FileRead(path.clone(), e))?;
                Box::new(BufReader::new(file))
            }
        };

        let reader: Box<dyn AsyncRead + Unpin + Send> = if source.is_gzipped() {
            Box::new(GzipDecoder::new(buffered))
        } else {
            Box::new(buffered)
        };

        // One byte past the cap is enough to tell an oversized source from one that fits exactly.
        let mut contents = Vec::new();
        reader
            .take(self.max_download_bytes.saturating_add(1))
            .read_to_end(&mut contents)
            .await?;
        if contents.len() as u64 > self.max_download_bytes {
            warn!(
                "{} is larger than the {} byte limit",
                source, self.max_download_bytes
            );
            return Err(LoadError::SizeLimitExceeded {
                source_name: source.to_string(),
                limit: self.max_download_bytes,
            });
        }
        Ok(contents)
    }

    async fn open_remote(&self, url: &str) -> Result<SourceReader, LoadError> {
        info!("Downloading data from {}", url);

        let response = self
            .download_client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    LoadError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    LoadError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        let stream = response.bytes_stream().map_err(std::io::Error::other);
        Ok(Box::new(StreamReader::new(stream)))
    }

    /// Parses CSV bytes with a header row and builds the canonical frame on a blocking task.
    async fn csv_to_dataframe(
        bytes: Vec<u8>,
        granularity: Granularity,
    ) -> Result<DataFrame, LoadError> {
        task::spawn_blocking(move || {
            let raw = CsvReadOptions::default()
                .with_has_header(true)
                .into_reader_with_file_handle(Cursor::new(bytes))
                .finish()
                .map_err(|source| LoadError::CsvRead {
                    granularity,
                    source,
                })?;

            let malformed = |source: ExtractError| LoadError::Malformed {
                granularity,
                source,
            };

            if let Some(missing) = granularity
                .required_columns()
                .into_iter()
                .find(|name| raw.column(name).is_err())
            {
                warn!(
                    "The {} dataset has no '{}' column (found {:?})",
                    granularity,
                    missing,
                    raw.get_column_names()
                );
                return Err(malformed(ExtractError::MissingColumn(missing.to_string())));
            }

            let rows = extract_rows(&raw).map_err(malformed)?;
            let canonical = match granularity {
                Granularity::Daily => rows_to_frame(&rows, None),
                Granularity::Hourly => {
                    let hours = extract_hours(&raw).map_err(malformed)?;
                    rows_to_frame(&rows, Some(&hours))
                }
            };
            canonical.map_err(malformed)
        })
        .await?
    }
}
