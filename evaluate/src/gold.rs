use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use papyeval::{read_fixture, tag, CorpusProvider, Result, Sentence};
use papyeval_rules::SentenceAssembler;

/// Opens a file for reading, decompressing it when its name ends with `.zst`.
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let f = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "zst") {
        Ok(Box::new(BufReader::new(zstd::Decoder::new(f)?)))
    } else {
        Ok(Box::new(BufReader::new(f)))
    }
}

/// Reads gold sentences from an evaluation fixture.
///
/// Fixture tags are already canonical except for the proper-noun marker.
pub fn from_fixture<R>(rdr: R) -> Result<Vec<Sentence>>
where
    R: BufRead,
{
    let mut sentences = read_fixture(rdr)?;
    for sentence in &mut sentences {
        for gold in sentence.tags_mut() {
            *gold = tag::strip_proper_noun(gold).into_owned();
        }
    }
    Ok(sentences)
}

/// Reads gold sentences from every annotated document of a corpus.
pub fn from_corpus<C>(corpus: &C) -> Result<Vec<Sentence>>
where
    C: CorpusProvider,
{
    let assembler = SentenceAssembler::new();
    let mut sentences = vec![];
    for document in corpus.list_annotated_documents()? {
        let records = corpus.list_tokens(document.id)?;
        log::debug!("Document {}: {} tokens", document.id, records.len());
        sentences.extend(assembler.assemble(document.id, &records)?);
    }
    Ok(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use papyeval::{CorpusError, Document, PapyevalError, TokenRecord};

    struct StubCorpus {
        fail: bool,
    }

    impl CorpusProvider for StubCorpus {
        fn list_annotated_documents(&self) -> Result<Vec<Document>> {
            Ok(vec![Document { id: 8 }, Document { id: 9 }])
        }

        fn list_tokens(&self, document_id: i64) -> Result<Vec<TokenRecord>> {
            if self.fail {
                return Err(CorpusError {
                    operation: "list_tokens",
                    sql: "SELECT".to_string(),
                    params: format!("[{document_id}]"),
                    msg: "no such table: token".to_string(),
                }
                .into());
            }
            let record = |sentence_index, raw_form: &str, raw_gold_tag: &str| TokenRecord {
                sentence_index,
                position_index: 1,
                raw_form: raw_form.to_string(),
                raw_gold_tag: raw_gold_tag.to_string(),
            };
            Ok(match document_id {
                8 => vec![record(1, "Ἀπολλώνιος", "n-s---mnp"), record(1, ".", "")],
                _ => vec![record(3, "χαίρειν", "v--pna---")],
            })
        }
    }

    #[test]
    fn test_from_fixture_strips_proper_noun() {
        let fixture = r#"{"id": "1", "tokens": ["Ἀπολλώνιος", "χαίρειν"], "pos_tags": ["n-s---mnp", "_"]}"#;
        let sentences = from_fixture(fixture.as_bytes()).unwrap();

        assert_eq!(&["n-s---mn-", "_"], sentences[0].tags());
        assert_eq!(&["Ἀπολλώνιος", "χαίρειν"], sentences[0].tokens());
    }

    #[test]
    fn test_open_reader_zstd() {
        let fixture = r#"{"id": "7", "tokens": ["Διονύσιος", "χαίρειν"], "pos_tags": ["n-s---mnp", "v--pna---"]}"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.jsonl.zst");
        let mut encoder = zstd::Encoder::new(File::create(&path).unwrap(), 3).unwrap();
        writeln!(encoder, "{fixture}").unwrap();
        encoder.finish().unwrap();

        let sentences = from_fixture(open_reader(&path).unwrap()).unwrap();

        assert_eq!(1, sentences.len());
        assert_eq!("7", sentences[0].id());
        assert_eq!(&["Διονύσιος", "χαίρειν"], sentences[0].tokens());
        assert_eq!(&["n-s---mn-", "v--pna---"], sentences[0].tags());
    }

    #[test]
    fn test_open_reader_plain() {
        let fixture = r#"{"id": "7", "tokens": ["χαίρειν"], "pos_tags": ["v--pna---"]}"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.jsonl");
        std::fs::write(&path, fixture).unwrap();

        let sentences = from_fixture(open_reader(&path).unwrap()).unwrap();

        assert_eq!(&["χαίρειν"], sentences[0].tokens());
    }

    #[test]
    fn test_from_corpus() {
        let sentences = from_corpus(&StubCorpus { fail: false }).unwrap();

        assert_eq!(2, sentences.len());
        assert_eq!("8000001", sentences[0].id());
        assert_eq!(&["απολλωνιος", "."], sentences[0].tokens());
        assert_eq!(&["n-s---mn-", "u--------"], sentences[0].tags());
        assert_eq!("9000003", sentences[1].id());
    }

    #[test]
    fn test_from_corpus_error() {
        let result = from_corpus(&StubCorpus { fail: true });

        assert!(matches!(result, Err(PapyevalError::Corpus(_))));
    }
}
