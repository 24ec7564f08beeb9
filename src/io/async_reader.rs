//! Asynchronous CSV reader with batch interface
//!
//! Reads scenario rows from any `futures` async reader using csv-async.
//! Batches only bound how much is buffered; rows come out in file order,
//! each as a step or as a `ParseError` carrying its line number.
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of Result<Step>
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{BankError, Step};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    line_num: u64,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            line_num: 1,
        }
    }

    /// Read up to `batch_size` rows
    ///
    /// Invalid rows come back as `Err` with their line number. Returns an
    /// empty vector once the end of the input is reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<Result<Step, BankError>> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            let Some(result) = records.next().await else {
                break;
            };
            self.line_num += 1;

            let line = Some(self.line_num);
            batch.push(match result {
                Ok(csv_record) => convert_csv_record(csv_record).map_err(|e| BankError::ParseError {
                    line,
                    message: e.to_string(),
                }),
                Err(e) => Err(BankError::ParseError {
                    line,
                    message: e.to_string(),
                }),
            });
        }

        batch
    }
}
