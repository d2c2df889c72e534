/*! Streaming join of a translation corpus against a side table.

The translation corpus is a JSON lines stream where each record carries a target language
and the 1-based position (`rec_num`) of its source caption in a [SideTable].
[StreamJoin] filters the stream on one language, looks every kept record up in the side table,
and numbers the joined records `0, 1, 2...` regardless of the gaps in `rec_num`.

Exactly one joined record is held back (pending) until the next one is read,
so that the end of the stream is known before the last record is handed out.
At the end of the stream the reader is rewound to its start: once a pass has ended
(with a single `None`), iterating again replays the same sequence with the same ids.

A `rec_num` with no side table row, or a line that cannot be decoded, aborts the pass:
the error is yielded, then the pass ends.
!*/
use std::cell::RefCell;
use std::io::{BufRead, Seek, SeekFrom};
use std::path::PathBuf;
use std::rc::Rc;

use log::{debug, warn};
use reqwest::Url;
use serde::Deserialize;

use crate::download::Fetch;
use crate::error::Error;
use crate::io::reader::{LookupRow, SideTable};

/// A translation corpus line.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StreamRecord {
    pub trg_lang: String,
    pub rec_num: u64,
    pub caption_tokenized: String,
    pub translation_tokenized: String,
    pub backtranslation_tokenized: String,
}

/// A stream record with its side table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joined {
    pub id: u64,
    pub record: StreamRecord,
    pub row: LookupRow,
    /// Set when the image has been downloaded, see [ImageFetch].
    pub local_image: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Streaming,
    /// The pass is over, the next call ends it and prepares a new one.
    Exhausted,
}

pub struct StreamJoin<R> {
    reader: R,
    table: Rc<SideTable>,
    lang: String,
    buf: String,
    line: usize,
    id: Option<u64>,
    pending: Option<Joined>,
    state: State,
    last_id: Option<u64>,
}

impl<R> StreamJoin<R>
where
    R: BufRead + Seek,
{
    /// Join `reader` against `table`, keeping records whose `trg_lang` is `lang`.
    pub fn new(reader: R, table: Rc<SideTable>, lang: impl Into<String>) -> Self {
        Self {
            reader,
            table,
            lang: lang.into(),
            buf: String::new(),
            line: 0,
            id: None,
            pending: None,
            state: State::Streaming,
            last_id: None,
        }
    }

    /// Id of the last record of the latest complete pass.
    ///
    /// `None` if no pass completed yet, or if the latest one had no matching record.
    pub fn last_id(&self) -> Option<u64> {
        self.last_id
    }

    /// Whether a joined record is held back.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Read lines until one targets our language.
    fn next_accepted(&mut self) -> Result<Option<StreamRecord>, Error> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let line_no = self.line;

            let line = self.buf.trim();
            if line.is_empty() {
                continue;
            }

            let record: StreamRecord = serde_json::from_str(line)
                .map_err(|source| Error::MalformedRecord {
                    line: line_no,
                    source,
                })?;

            if record.trg_lang == self.lang {
                return Ok(Some(record));
            }
        }
    }

    fn restart(&mut self) {
        self.line = 0;
        self.id = None;
        self.pending = None;
        self.state = State::Streaming;
    }

    /// End the pass on error, discarding the pending record.
    fn abort(&mut self, e: Error) -> Error {
        if let Err(seek_err) = self.reader.seek(SeekFrom::Start(0)) {
            warn!("could not rewind translation stream: {}", seek_err);
        }
        self.pending = None;
        self.state = State::Exhausted;
        e
    }

    /// End of stream: rewind and hand out the pending record, if any.
    fn drain(&mut self) -> Option<Result<Joined, Error>> {
        if let Err(e) = self.reader.seek(SeekFrom::Start(0)) {
            return Some(Err(self.abort(e.into())));
        }
        self.last_id = self.id;
        debug!(
            "[{}] end of stream after {} lines, last id {:?}",
            self.lang, self.line, self.last_id
        );

        match self.pending.take() {
            Some(last) => {
                self.state = State::Exhausted;
                Some(Ok(last))
            }
            None => {
                self.restart();
                None
            }
        }
    }
}

impl<R> Iterator for StreamJoin<R>
where
    R: BufRead + Seek,
{
    type Item = Result<Joined, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == State::Exhausted {
            self.restart();
            return None;
        }

        loop {
            match self.next_accepted() {
                Ok(Some(record)) => {
                    let row = match self.table.get(record.rec_num) {
                        Some(row) => row.clone(),
                        None => {
                            let e = Error::MissingSideRow {
                                rec_num: record.rec_num,
                                line: self.line,
                            };
                            return Some(Err(self.abort(e)));
                        }
                    };

                    let id = self.id.map_or(0, |id| id + 1);
                    self.id = Some(id);
                    let joined = Joined {
                        id,
                        record,
                        row,
                        local_image: None,
                    };

                    if let Some(previous) = self.pending.replace(joined) {
                        return Some(Ok(previous));
                    }
                }
                Ok(None) => return self.drain(),
                Err(e) => return Some(Err(self.abort(e))),
            }
        }
    }
}

/// Side table positions whose image could not be downloaded.
///
/// Clones share the same list, so a handle taken before the iterator is boxed
/// can still be read once the pass is over.
#[derive(Debug, Clone, Default)]
pub struct FailedRows(Rc<RefCell<Vec<u64>>>);

impl FailedRows {
    pub fn to_vec(&self) -> Vec<u64> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    fn push(&self, rec_num: u64) {
        self.0.borrow_mut().push(rec_num);
    }

    fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// Best-effort image download for joined records.
///
/// Failures do not interrupt the iteration: the record keeps its remote url
/// and its `rec_num` is remembered in [ImageFetch::failed].
/// The list covers the current pass, or the last one once it has ended.
pub struct ImageFetch<I> {
    inner: I,
    fetcher: Rc<dyn Fetch>,
    failed: FailedRows,
    pass_over: bool,
}

impl<I> ImageFetch<I> {
    pub fn new(inner: I, fetcher: Rc<dyn Fetch>) -> Self {
        Self {
            inner,
            fetcher,
            failed: FailedRows::default(),
            pass_over: false,
        }
    }

    pub fn failed(&self) -> FailedRows {
        self.failed.clone()
    }

    fn fetch(&self, url: &str) -> Result<PathBuf, Error> {
        let url = Url::parse(url)?;
        self.fetcher.fetch(&url)
    }
}

impl<I> Iterator for ImageFetch<I>
where
    I: Iterator<Item = Result<Joined, Error>>,
{
    type Item = Result<Joined, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pass_over {
            self.failed.clear();
            self.pass_over = false;
        }

        match self.inner.next() {
            Some(Ok(mut joined)) => {
                match self.fetch(&joined.row.img_url) {
                    Ok(path) => joined.local_image = Some(path),
                    Err(e) => {
                        warn!(
                            "could not download image of row {} ({}): {}",
                            joined.record.rec_num, joined.row.img_url, e
                        );
                        self.failed.push(joined.record.rec_num);
                    }
                }
                Some(Ok(joined))
            }
            None => {
                if !self.failed.is_empty() {
                    warn!("{} images could not be downloaded", self.failed.len());
                }
                self.pass_over = true;
                None
            }
            err => err,
        }
    }
}
