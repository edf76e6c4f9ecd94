//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`], which lays out a temporary project directory and
//! a finals directory, plus builders for small but realistic FCP and
//! Premiere documents.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use tempfile::TempDir;

/// Temporary `projects/` + `finals/` layout.
pub struct TestHarness {
    pub temp: TempDir,
    pub projects: PathBuf,
    pub finals: PathBuf,
}

impl TestHarness {
    /// Create the layout with the given (empty) replacement files.
    pub fn new(finals: &[&str]) -> Self {
        let temp = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp.path().canonicalize().expect("temp dir should resolve");
        let projects = root.join("projects");
        let finals_dir = root.join("finals");
        fs::create_dir_all(&projects).unwrap();
        fs::create_dir_all(&finals_dir).unwrap();
        for name in finals {
            fs::write(finals_dir.join(name), b"").unwrap();
        }

        Self {
            temp,
            projects,
            finals: finals_dir,
        }
    }

    /// Write a plain-text project file and return its path.
    pub fn write_project(&self, name: &str, content: &str) -> PathBuf {
        let path = self.projects.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a gzip-compressed project file and return its path.
    pub fn write_gzip_project(&self, name: &str, content: &str) -> PathBuf {
        let path = self.projects.join(name);
        let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        fs::write(&path, encoder.finish().unwrap()).unwrap();
        path
    }
}

/// A video clip item with a full file description.
pub fn fcp_clip(id: &str, name: &str, file_id: &str, pathurl: &str) -> String {
    format!(
        r#"
          <clipitem id="{id}">
            <name>{name}</name>
            <duration>250</duration>
            <rate><ntsc>FALSE</ntsc><timebase>25</timebase></rate>
            <file id="{file_id}">
              <name>{name}</name>
              <pathurl>{pathurl}</pathurl>
              <media><video><samplecharacteristics><width>1920</width></samplecharacteristics></video></media>
            </file>
            <pixelaspectratio>square</pixelaspectratio>
          </clipitem>"#
    )
}

/// An audio clip item linked to the media of `file_id`; it has no
/// `pixelaspectratio`.
pub fn fcp_audio_clip(id: &str, name: &str, file_id: &str) -> String {
    format!(
        r#"
          <clipitem id="{id}">
            <name>{name}</name>
            <file id="{file_id}"/>
            <sourcetrack><mediatype>audio</mediatype></sourcetrack>
          </clipitem>"#
    )
}

/// Wrap clip items in an `xmeml` sequence.
pub fn fcp_project(video_clips: &[String], audio_clips: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE xmeml>
<xmeml version="4">
  <sequence id="sequence-1">
    <name>Promo</name>
    <media>
      <video>
        <track>{}
        </track>
      </video>
      <audio>
        <track>{}
        </track>
      </audio>
    </media>
  </sequence>
</xmeml>
"#,
        video_clips.concat(),
        audio_clips.concat()
    )
}

/// A Premiere document with one Media entry per title, each with a master
/// clip, project item, logging info and subclip echoing the title.
pub fn premiere_project(titles: &[&str]) -> String {
    let mut body = String::new();
    for (i, title) in titles.iter().enumerate() {
        body.push_str(&format!(
            r#"
  <Media ObjectUID="media-{i}" ClassID="7a5c103e" Version="30">
    <RelativePath>../old/{title}</RelativePath>
    <FilePath>/old/{title}</FilePath>
    <ActualMediaFilePath>/old/{title}</ActualMediaFilePath>
    <Title>{title}</Title>
  </Media>
  <ClipProjectItem ObjectUID="item-{i}" ClassID="cb4e0ed7" Version="1">
    <ProjectItem Version="1"><Name>{title}</Name></ProjectItem>
  </ClipProjectItem>
  <MasterClip ObjectUID="master-{i}" ClassID="fb11c33a" Version="11"><Name>{title}</Name></MasterClip>
  <ClipLoggingInfo ObjectID="{i}" ClassID="77ab7fb1" Version="10"><ClipName>{title}</ClipName></ClipLoggingInfo>
  <SubClip ObjectID="sub-{i}" ClassID="e0c58dc9" Version="5"><Name>{title}</Name></SubClip>"#
        ));
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<PremiereData Version=\"3\">{}\n</PremiereData>\n",
        body
    )
}

/// `file://localhost` URL for an absolute path without special characters.
pub fn file_url(path: &Path) -> String {
    format!("file://localhost{}", path.display())
}
