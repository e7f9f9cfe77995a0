//! Full pipeline runs driven through scripted interaction, no TTY required.

use std::cell::RefCell;
use std::fs;

use anyhow::Result;
use assert_fs::prelude::*;
use assert_fs::TempDir;

use std::path::PathBuf;

use pluck::app::{run_pipeline, Outcome};
use pluck::ui::{Asker, Selection, SelectionProvider};
use pluck::{Entry, EntrySet};

/// Picker that chooses every candidate.
struct PickAll;

impl SelectionProvider for PickAll {
    fn pick(&self, candidates: &EntrySet) -> Result<Selection> {
        Ok(Selection::Chosen(candidates.iter().cloned().collect()))
    }
}

/// Picker that always aborts.
struct AlwaysCancel;

impl SelectionProvider for AlwaysCancel {
    fn pick(&self, _candidates: &EntrySet) -> Result<Selection> {
        Ok(Selection::Cancelled)
    }
}

/// Asker replaying a fixed script of answers, front to back.
struct Answers(RefCell<Vec<bool>>);

impl Answers {
    fn new(answers: &[bool]) -> Self {
        Self(RefCell::new(answers.to_vec()))
    }
}

impl Asker for Answers {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(self.0.borrow_mut().remove(0))
    }
}

#[test]
fn full_run_transfers_disposes_and_reports() {
    let td = TempDir::new().unwrap();
    let src = td.child("src");
    let dest = td.child("dest");
    src.create_dir_all().unwrap();
    dest.create_dir_all().unwrap();
    src.child("x.txt").write_str("x-bytes").unwrap();
    src.child("y.txt").write_str("y-bytes").unwrap();

    // one answer: accept the aggregate disposal question
    let asker = Answers::new(&[true]);
    let outcome = run_pipeline(src.path(), dest.path(), &PickAll, &asker).unwrap();

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(
        fs::read_to_string(dest.path().join("x.txt")).unwrap(),
        "x-bytes"
    );
    assert_eq!(
        fs::read_to_string(dest.path().join("y.txt")).unwrap(),
        "y-bytes"
    );
    assert!(!src.path().join("x.txt").exists());
    assert!(!src.path().join("y.txt").exists());
}

#[test]
fn rejected_disposal_keeps_both_sides() {
    let td = TempDir::new().unwrap();
    let src = td.child("src");
    let dest = td.child("dest");
    src.create_dir_all().unwrap();
    dest.create_dir_all().unwrap();
    src.child("x.txt").write_str("x").unwrap();
    src.child("y.txt").write_str("y").unwrap();

    let asker = Answers::new(&[false]);
    let outcome = run_pipeline(src.path(), dest.path(), &PickAll, &asker).unwrap();

    assert_eq!(outcome, Outcome::Done);
    // destination holds copies of both, originals remain
    assert!(dest.path().join("x.txt").exists());
    assert!(dest.path().join("y.txt").exists());
    assert!(src.path().join("x.txt").exists());
    assert!(src.path().join("y.txt").exists());
}

#[test]
fn rejected_conflict_is_skipped_end_to_end() {
    let td = TempDir::new().unwrap();
    let src = td.child("src");
    let dest = td.child("dest");
    src.create_dir_all().unwrap();
    dest.create_dir_all().unwrap();
    src.child("a.txt").write_str("a-new").unwrap();
    src.child("e.txt").write_str("e-new").unwrap();
    dest.child("e.txt").write_str("e-old").unwrap();

    // reject the overwrite for e.txt, then reject disposal
    let asker = Answers::new(&[false, false]);
    let outcome = run_pipeline(src.path(), dest.path(), &PickAll, &asker).unwrap();

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(
        fs::read_to_string(dest.path().join("a.txt")).unwrap(),
        "a-new"
    );
    // e.txt is untouched at both ends
    assert_eq!(
        fs::read_to_string(dest.path().join("e.txt")).unwrap(),
        "e-old"
    );
    assert_eq!(
        fs::read_to_string(src.path().join("e.txt")).unwrap(),
        "e-new"
    );
}

#[test]
fn every_conflict_rejected_means_nothing_to_do() {
    let td = TempDir::new().unwrap();
    let src = td.child("src");
    let dest = td.child("dest");
    src.create_dir_all().unwrap();
    dest.create_dir_all().unwrap();
    src.child("e.txt").write_str("e-new").unwrap();
    dest.child("e.txt").write_str("e-old").unwrap();

    let asker = Answers::new(&[false]);
    let outcome = run_pipeline(src.path(), dest.path(), &PickAll, &asker).unwrap();

    assert_eq!(outcome, Outcome::NothingToDo);
    assert_eq!(
        fs::read_to_string(dest.path().join("e.txt")).unwrap(),
        "e-old"
    );
}

#[test]
fn cancellation_is_a_clean_noop() {
    let td = TempDir::new().unwrap();
    let src = td.child("src");
    let dest = td.child("dest");
    src.create_dir_all().unwrap();
    dest.create_dir_all().unwrap();
    src.child("x.txt").write_str("x").unwrap();

    let asker = Answers::new(&[]);
    let outcome = run_pipeline(src.path(), dest.path(), &AlwaysCancel, &asker).unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
    assert!(!dest.path().join("x.txt").exists());
    assert!(src.path().join("x.txt").exists());
}

/// Picker that returns a fixed batch, regardless of the candidates.
struct Fixed(Vec<PathBuf>);

impl SelectionProvider for Fixed {
    fn pick(&self, _candidates: &EntrySet) -> Result<Selection> {
        Ok(Selection::Chosen(
            self.0.iter().cloned().map(Entry::new).collect(),
        ))
    }
}

/// Asker recording every prompt it is shown while replaying fixed answers.
struct Recorder {
    prompts: RefCell<Vec<String>>,
    answers: RefCell<Vec<bool>>,
}

impl Recorder {
    fn new(answers: &[bool]) -> Self {
        Self {
            prompts: RefCell::new(Vec::new()),
            answers: RefCell::new(answers.to_vec()),
        }
    }
}

impl Asker for Recorder {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.answers.borrow_mut().remove(0))
    }
}

#[test]
fn copy_failure_still_offers_disposal_for_the_copied_prefix() {
    let td = TempDir::new().unwrap();
    let src = td.child("src");
    let dest = td.child("dest");
    src.create_dir_all().unwrap();
    dest.create_dir_all().unwrap();
    src.child("a.txt").write_str("a").unwrap();
    src.child("c.txt").write_str("c").unwrap();

    // b.txt never exists, so the copy fails mid-batch
    let batch = Fixed(vec![
        src.path().join("a.txt"),
        src.path().join("b.txt"),
        src.path().join("c.txt"),
    ]);
    let asker = Recorder::new(&[true]);
    let outcome = run_pipeline(src.path(), dest.path(), &batch, &asker).unwrap();

    assert_eq!(outcome, Outcome::Failed);
    // the prefix landed and nothing past the failure was attempted
    assert!(dest.path().join("a.txt").exists());
    assert!(!dest.path().join("b.txt").exists());
    assert!(!dest.path().join("c.txt").exists());
    // the disposal offer was still made, exactly once, and deleted the prefix
    let prompts = asker.prompts.borrow();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("DELETE original?"));
    assert!(!src.path().join("a.txt").exists());
    assert!(src.path().join("c.txt").exists());
}

#[test]
fn destination_nested_in_source_stays_out_of_its_own_listing() {
    let td = TempDir::new().unwrap();
    let src = td.child("src");
    let dest = src.child("pulled");
    src.create_dir_all().unwrap();
    dest.create_dir_all().unwrap();
    src.child("x.txt").write_str("x").unwrap();

    let asker = Answers::new(&[true]);
    let outcome = run_pipeline(src.path(), dest.path(), &PickAll, &asker).unwrap();

    assert_eq!(outcome, Outcome::Done);
    assert!(dest.path().join("x.txt").exists());
    assert!(!src.path().join("x.txt").exists());
}
