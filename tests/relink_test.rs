//! Relink integration tests.
//!
//! Opens real project files from a temporary directory, runs the format
//! adapters, and checks what is written back to disk.

mod common;

use clipswap::interact::{AssumeYes, RecordedDiagnostics, ScriptedConfirm};
use clipswap::pool::CandidatePool;
use clipswap::project::{Project, ProjectFormat};
use clipswap::relink::{relink, RelinkContext, RelinkOptions, RelinkSummary};
use clipswap_common::Error;
use clipswap_xml::{parse_document, Compression};
use common::{fcp_audio_clip, fcp_clip, fcp_project, file_url, premiere_project, TestHarness};
use std::fs;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn relink_with(
    harness: &TestHarness,
    project: &mut Project,
    confirm: &mut dyn clipswap::interact::Confirm,
    options: RelinkOptions,
) -> Result<(RelinkSummary, RecordedDiagnostics), Error> {
    let mut pool = CandidatePool::from_dir(&harness.finals)?;
    let mut diagnostics = RecordedDiagnostics::default();
    let project_dir = project.path.parent().unwrap().to_path_buf();
    let mut ctx = RelinkContext {
        finals_dir: &harness.finals,
        project_dir: &project_dir,
        options,
        confirm,
        diagnostics: &mut diagnostics,
    };
    let summary = relink(project, &mut pool, &mut ctx)?;
    Ok((summary, diagnostics))
}

fn texts(doc: &clipswap_xml::Document, path: &str) -> Vec<String> {
    doc.select_descendants(path)
        .iter()
        .map(|p| doc.get(p).unwrap().text())
        .collect()
}

// ---------------------------------------------------------------------------
// Final Cut Pro
// ---------------------------------------------------------------------------

#[test]
fn fcp_relinks_and_writes_plain_output() {
    let harness = TestHarness::new(&["petropics-873123292-640_adpp.mp4"]);
    let xml = fcp_project(
        &[fcp_clip(
            "clipitem-1",
            "PetroPics-873123292-640_adpp-v1.mov",
            "file-1",
            "file://localhost/old/PetroPics-873123292-640_adpp-v1.mov",
        )],
        &[fcp_audio_clip("clipitem-2", "PetroPics-873123292-640_adpp-v1.mov", "file-1")],
    );
    let path = harness.write_project("promo.xml", &xml);

    let mut project = Project::open(&path).unwrap();
    assert_eq!(project.format, ProjectFormat::FinalCutPro);

    let (summary, _) =
        relink_with(&harness, &mut project, &mut AssumeYes, RelinkOptions::default()).unwrap();
    assert_eq!(summary.replaced.len(), 1);

    let out = harness.projects.join("promo_replaced.xml");
    project.save(&out, true).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE xmeml>\n"));

    let doc = parse_document(&written).unwrap();
    let expected_url = file_url(&harness.finals.join("petropics-873123292-640_adpp.mp4"));
    assert_eq!(texts(&doc, "file/pathurl"), vec![expected_url]);
    // The linked audio clip follows the video clip's new name.
    assert_eq!(
        texts(&doc, "clipitem/name"),
        vec!["petropics-873123292-640_adpp.mp4", "petropics-873123292-640_adpp.mp4"]
    );
}

#[test]
fn fcp_candidate_used_once_per_run() {
    let harness = TestHarness::new(&["shot.mp4"]);
    let xml = fcp_project(
        &[
            fcp_clip("c1", "SHOT-A.mov", "f1", "file:///old/SHOT-A.mov"),
            fcp_clip("c2", "SHOT-B.mov", "f2", "file:///old/SHOT-B.mov"),
            fcp_clip("c3", "SHOT-C.mov", "f3", "file:///old/SHOT-C.mov"),
        ],
        &[],
    );
    let path = harness.write_project("cut.xml", &xml);
    let mut project = Project::open(&path).unwrap();

    let mut confirm = ScriptedConfirm::new([true, true, true]);
    let (summary, diagnostics) =
        relink_with(&harness, &mut project, &mut confirm, RelinkOptions::default()).unwrap();

    assert_eq!(confirm.prompts.len(), 1);
    assert_eq!(summary.replaced.len(), 1);
    assert_eq!(summary.skipped, 2);
    assert!(diagnostics.contains("No replacement found for SHOT-B.mov"));
    assert!(diagnostics.contains("No replacement found for SHOT-C.mov"));
}

#[test]
fn fcp_without_matches_round_trips() {
    let harness = TestHarness::new(&["unrelated.mp4"]);
    let xml = fcp_project(
        &[fcp_clip("c1", "A001.mov", "f1", "file:///old/A001.mov")],
        &[fcp_audio_clip("c2", "A001.mov", "f1")],
    );
    let path = harness.write_project("cut.xml", &xml);
    let mut project = Project::open(&path).unwrap();

    let (summary, _) =
        relink_with(&harness, &mut project, &mut AssumeYes, RelinkOptions::default()).unwrap();
    assert!(summary.replaced.is_empty());

    let out = harness.projects.join("cut_replaced.xml");
    project.save(&out, true).unwrap();

    let original = parse_document(&xml).unwrap();
    let written = parse_document(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written, original);
}

#[test]
fn fcp_malformed_clip_aborts_before_output() {
    let harness = TestHarness::new(&["a001.mp4"]);
    let xml = fcp_project(&[fcp_clip("c1", "A001.mov", "f1", "")], &[]);
    let path = harness.write_project("cut.xml", &xml);
    let mut project = Project::open(&path).unwrap();

    let err = relink_with(&harness, &mut project, &mut AssumeYes, RelinkOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::MalformedClip(_)));
}

// ---------------------------------------------------------------------------
// Premiere
// ---------------------------------------------------------------------------

#[test]
fn premiere_without_matches_round_trips() {
    let harness = TestHarness::new(&["unrelated.mp4"]);
    let xml = premiere_project(&["A001_C001.mov", "B002_C003.mov"]);
    let path = harness.write_gzip_project("edit.prproj", &xml);
    let mut project = Project::open(&path).unwrap();

    let (summary, diagnostics) =
        relink_with(&harness, &mut project, &mut AssumeYes, RelinkOptions::default()).unwrap();
    assert!(summary.replaced.is_empty());
    assert_eq!(summary.skipped, 2);
    assert!(diagnostics.contains("No replacement found for A001_C001.mov"));

    let out = harness.projects.join("edit_replaced.prproj");
    project.save(&out, true).unwrap();
    let reopened = Project::open(&out).unwrap();
    assert_eq!(reopened.compression, Compression::Gzip);

    let original = parse_document(&xml).unwrap();
    assert_eq!(reopened.document, original);

    let doc = &reopened.document;
    assert_eq!(texts(doc, "Media/Title"), vec!["A001_C001.mov", "B002_C003.mov"]);
    assert_eq!(
        texts(doc, "Media/FilePath"),
        vec!["/old/A001_C001.mov", "/old/B002_C003.mov"]
    );
    assert_eq!(
        texts(doc, "ClipLoggingInfo/ClipName"),
        vec!["A001_C001.mov", "B002_C003.mov"]
    );
}

#[test]
fn premiere_gzip_project_is_recompressed() {
    let harness = TestHarness::new(&["a001.mp4"]);
    let path = harness.write_gzip_project("edit.prproj", &premiere_project(&["A001_C001.mov"]));

    let mut project = Project::open(&path).unwrap();
    assert_eq!(project.format, ProjectFormat::Premiere);
    assert_eq!(project.compression, Compression::Gzip);

    relink_with(&harness, &mut project, &mut AssumeYes, RelinkOptions::default()).unwrap();

    let out = harness.projects.join("edit_replaced.prproj");
    project.save(&out, true).unwrap();
    let reopened = Project::open(&out).unwrap();
    assert_eq!(reopened.compression, Compression::Gzip);

    let doc = &reopened.document;
    assert_eq!(texts(doc, "Media/Title"), vec!["a001.mp4"]);
    assert_eq!(texts(doc, "Media/RelativePath"), vec!["../finals/a001.mp4"]);
    assert_eq!(
        texts(doc, "Media/FilePath"),
        vec![harness.finals.join("a001.mp4").display().to_string()]
    );
    for echo in [
        "ClipProjectItem/ProjectItem/Name",
        "MasterClip/Name",
        "ClipLoggingInfo/ClipName",
        "SubClip/Name",
    ] {
        assert_eq!(texts(doc, echo), vec!["a001.mp4"], "echo node {}", echo);
    }
}

#[test]
fn premiere_plain_output_when_recompress_disabled() {
    let harness = TestHarness::new(&["a001.mp4"]);
    let path = harness.write_gzip_project("edit.prproj", &premiere_project(&["A001.mov"]));
    let project = Project::open(&path).unwrap();

    let out = harness.projects.join("plain.prproj");
    project.save(&out, false).unwrap();
    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<PremiereData"));
}

#[test]
fn premiere_only_matching_echoes_are_renamed() {
    let harness = TestHarness::new(&["b002.mp4"]);
    let path = harness.write_project("edit.xml", &premiere_project(&["A001.mov", "B002.mov"]));
    let mut project = Project::open(&path).unwrap();

    let (summary, _) =
        relink_with(&harness, &mut project, &mut AssumeYes, RelinkOptions::default()).unwrap();
    assert_eq!(summary.replaced.len(), 1);
    assert_eq!(summary.skipped, 1);

    let doc = &project.document;
    assert_eq!(texts(doc, "MasterClip/Name"), vec!["A001.mov", "b002.mp4"]);
    assert_eq!(texts(doc, "SubClip/Name"), vec!["A001.mov", "b002.mp4"]);
}

#[test]
fn premiere_reuse_disabled_consumes_candidates() {
    let harness = TestHarness::new(&["shot.mp4"]);
    let path = harness.write_project("edit.xml", &premiere_project(&["SHOT-1.mov", "SHOT-2.mov"]));
    let mut project = Project::open(&path).unwrap();

    let options = RelinkOptions {
        allow_candidate_reuse: false,
        ..RelinkOptions::default()
    };
    let (summary, _) = relink_with(&harness, &mut project, &mut AssumeYes, options).unwrap();
    assert_eq!(summary.replaced.len(), 1);
    assert_eq!(texts(&project.document, "Media/Title"), vec!["shot.mp4", "SHOT-2.mov"]);
}
