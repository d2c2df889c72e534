use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

use serde_json::{json, Value};
use zip::write::FileOptions;

use sealoader::config::{Context, Split};
use sealoader::download::LocalFetcher;
use sealoader::error::Error;
use sealoader::pipeline::{Generation, SplitReport};

const VIDATA_URL: &str =
    "https://www.ims.uni-stuttgart.de/documents/ressourcen/experiment-daten/ViData.zip";
const QA_BASE: &str = "https://raw.githubusercontent.com/triet2397/UIT-ViCoV19QA/main/dataset";
const MEDEV_BASE: &str = "https://huggingface.co/datasets/nhuvo/MedEV/resolve/main";

fn counts(reports: &[SplitReport]) -> Vec<(Split, usize)> {
    reports.iter().map(|r| (r.split, r.nb_records)).collect()
}

fn read_jsonl(path: &Path) -> Vec<Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn vidata_zip(path: &Path) {
    let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
    zip.start_file("ViData/ViCon/400_noun_pairs.txt", FileOptions::default())
        .unwrap();
    zip.write_all("Word1\tWord2\tRelation\nnóng\tlạnh\tANT\nto\tlớn\tSYN\n".as_bytes())
        .unwrap();
    zip.start_file("ViData/ViSim-400/Visim-400.txt", FileOptions::default())
        .unwrap();
    zip.write_all("Word1\tWord2\tPOS\tSim1\tSim2\tSTD\nbiết\tchú_ý\tV\t2.7\t4.5\t0.8\n".as_bytes())
        .unwrap();
    zip.finish().unwrap();
}

#[test_log::test]
fn vicon_pairs() {
    let root = tempfile::tempdir().unwrap();
    let archive = root.path().join("ViData.zip");
    vidata_zip(&archive);
    let ctx = Context::new(Rc::new(LocalFetcher::new().with(VIDATA_URL, &archive)));

    let dst = root.path().join("vicon");
    let reports = Generation::new("vicon_noun_seacrowd_pairs", &dst, ctx)
        .run()
        .unwrap();
    assert_eq!(counts(&reports), vec![(Split::Train, 2)]);

    let records = read_jsonl(&dst.join("train.jsonl"));
    assert_eq!(
        records[0],
        json!({"id": "0", "text_1": "nóng", "text_2": "lạnh", "label": "ANT"})
    );
    assert_eq!(records[1]["label"], "SYN");
}

#[test]
fn visim400_shares_the_archive() {
    let root = tempfile::tempdir().unwrap();
    let archive = root.path().join("ViData.zip");
    vidata_zip(&archive);
    let ctx = Context::new(Rc::new(LocalFetcher::new().with(VIDATA_URL, &archive)));

    let dst = root.path().join("visim");
    Generation::new("visim400_source", &dst, ctx).run().unwrap();

    let records = read_jsonl(&dst.join("train.jsonl"));
    assert_eq!(
        records,
        vec![json!({
            "Word1": "biết",
            "Word2": "chú_ý",
            "POS": "V",
            "Sim1": "2.7",
            "Sim2": "4.5",
            "STD": "0.8",
        })]
    );
}

#[test]
fn qa_splits() {
    let root = tempfile::tempdir().unwrap();
    let mut fetcher = LocalFetcher::new();
    for (file, rows) in [("train", 3), ("val", 1), ("test", 2)] {
        let path = root.path().join(format!("UIT-ViCoV19QA_{}.csv", file));
        let mut content = String::from("id|question|answer_1\n");
        for i in 0..rows {
            content.push_str(&format!("{}|Câu hỏi {}?|Trả lời {}.\n", 100 + i, i, i));
        }
        fs::write(&path, content).unwrap();
        fetcher = fetcher.with(&format!("{}/1_ans/UIT-ViCoV19QA_{}.csv", QA_BASE, file), path);
    }

    let dst = root.path().join("qa");
    let reports = Generation::new("uit_vicov19qa_1_ans_seacrowd_qa", &dst, Context::new(Rc::new(fetcher)))
        .run()
        .unwrap();
    assert_eq!(
        counts(&reports),
        vec![(Split::Train, 3), (Split::Validation, 1), (Split::Test, 2)]
    );

    let test = read_jsonl(&dst.join("test.jsonl"));
    assert_eq!(test[1]["id"], "1");
    assert_eq!(test[1]["question_id"], "101");
    assert_eq!(test[1]["document_id"], "1");
    assert_eq!(test[1]["answer"], json!(["Trả lời 1."]));
}

#[test]
fn medev_t2t() {
    let root = tempfile::tempdir().unwrap();
    let mut fetcher = LocalFetcher::new();
    for name in [
        "train.en.txt",
        "train.vi.txt",
        "test.en.new.txt",
        "test.vi.new.txt",
        "val.en.new.txt",
        "val.vi.new.txt",
    ] {
        let path = root.path().join(name);
        let content = if name.contains(".en.") {
            "Wash your hands.\n"
        } else {
            "Rửa tay.\n"
        };
        fs::write(&path, content).unwrap();
        fetcher = fetcher.with(&format!("{}/{}?download=true", MEDEV_BASE, name), path);
    }

    let dst = root.path().join("medev");
    let reports = Generation::new("medev_seacrowd_t2t", &dst, Context::new(Rc::new(fetcher)))
        .run()
        .unwrap();
    assert_eq!(
        counts(&reports),
        vec![(Split::Train, 1), (Split::Test, 1), (Split::Validation, 1)]
    );

    let train = read_jsonl(&dst.join("train.jsonl"));
    assert_eq!(
        train[0],
        json!({
            "id": "0",
            "text_1": "Wash your hands.",
            "text_2": "Rửa tay.",
            "text_1_name": "en",
            "text_2_name": "vie",
        })
    );
}

#[test]
fn unknown_config() {
    let root = tempfile::tempdir().unwrap();
    let res = Generation::new(
        "vicon_noun_seacrowd_kb",
        root.path(),
        Context::new(Rc::new(LocalFetcher::new())),
    )
    .run();
    assert!(matches!(res, Err(Error::UnknownConfig(_))));
}

#[test]
fn failed_download() {
    let root = tempfile::tempdir().unwrap();
    let res = Generation::new(
        "vicon_verb_source",
        &root.path().join("out"),
        Context::new(Rc::new(LocalFetcher::new())),
    )
    .run();
    assert!(res.is_err());
}
