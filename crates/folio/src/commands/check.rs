//! `folio check` — validate a content directory without opening the UI.

use std::path::Path;

use anyhow::bail;
use colored::Colorize;

use crate::content::{self, blocks};

pub fn run(dir: &Path) -> anyhow::Result<()> {
    if !dir.exists() {
        bail!("Content directory not found: {}", dir.display());
    }
    let texts = dir.join("texts");
    if !texts.exists() {
        bail!("No texts/ directory under {}", dir.display());
    }

    let mut problems = 0;

    problems += check_file(&texts, "texts.txt", |text| {
        if text.trim().is_empty() {
            vec!["about text is empty".to_string()]
        } else {
            Vec::new()
        }
    });

    problems += check_file(&texts, "projects.txt", |text| {
        let blocks = blocks::split_blocks(text).len();
        let parsed = content::projects::parse(text);
        let mut notes = block_loss_notes("project", blocks, parsed.len());
        for project in &parsed {
            if project.images.is_empty() {
                notes.push(format!("project \"{}\" lists no images", project.title));
            }
            for image in &project.images {
                if !dir.join("images").join(image).exists() {
                    notes.push(format!(
                        "project \"{}\" references missing image {image}",
                        project.title
                    ));
                }
            }
        }
        notes
    });

    problems += check_file(&texts, "experience.txt", |text| {
        let blocks = blocks::split_blocks(text).len();
        let parsed = content::experience::parse(text);
        block_loss_notes("experience entry", blocks, parsed.len())
    });

    problems += check_file(&texts, "gallery.txt", |text| {
        let mut notes = Vec::new();
        let filenames = content::gallery::parse(text);
        if filenames.is_empty() {
            notes.push("gallery has no images".to_string());
        }
        for name in &filenames {
            if !dir.join("images").join(name).exists() {
                notes.push(format!("missing image {name}"));
            }
        }
        notes
    });

    problems += check_file(&texts, "skills.txt", |text| {
        if content::skills::parse(text).is_empty() {
            vec!["no skills parsed".to_string()]
        } else {
            Vec::new()
        }
    });

    problems += check_file(&texts, "contact.txt", |text| {
        if content::contact::parse(text).is_empty() {
            vec!["no contact entries parsed".to_string()]
        } else {
            Vec::new()
        }
    });

    println!();
    if problems == 0 {
        println!("{}", "All content files look good.".green().bold());
        Ok(())
    } else {
        println!("{}", format!("{problems} problem(s) found.").red().bold());
        bail!("content validation failed")
    }
}

fn check_file(texts: &Path, name: &str, inspect: impl Fn(&str) -> Vec<String>) -> usize {
    let path = texts.join(name);
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            println!("{} {name}: {err}", "missing".red().bold());
            return 1;
        }
    };
    let notes = inspect(&text);
    if notes.is_empty() {
        println!("{} {name}", "ok".green().bold());
        0
    } else {
        println!("{} {name}", "warn".yellow().bold());
        for note in &notes {
            println!("  {}", note.yellow());
        }
        notes.len()
    }
}

fn block_loss_notes(what: &str, blocks: usize, parsed: usize) -> Vec<String> {
    if parsed < blocks {
        vec![format!(
            "{} of {blocks} {what} block(s) skipped (fewer than 3 lines?)",
            blocks - parsed
        )]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_content(dir: &Path, name: &str, text: &str) {
        let texts = dir.join("texts");
        std::fs::create_dir_all(&texts).unwrap();
        std::fs::write(texts.join(name), text).unwrap();
    }

    #[test]
    fn missing_directory_fails() {
        assert!(run(Path::new("/nonexistent/content")).is_err());
    }

    #[test]
    fn complete_content_passes() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        std::fs::create_dir_all(dir.join("images")).unwrap();
        std::fs::write(dir.join("images").join("a.png"), b"png").unwrap();
        write_content(dir, "texts.txt", "Hello, I build things.");
        write_content(dir, "projects.txt", "Title\nSubtitle\nBody\na.png");
        write_content(dir, "experience.txt", "Role\nCompany\n2020\n- shipped");
        write_content(dir, "gallery.txt", "a.png");
        write_content(dir, "skills.txt", "Languages: Rust");
        write_content(dir, "contact.txt", "email: me@example.com");
        assert!(run(dir).is_ok());
    }

    #[test]
    fn missing_image_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        write_content(dir, "texts.txt", "Hello.");
        write_content(dir, "projects.txt", "Title\nSubtitle\nBody\nghost.png");
        write_content(dir, "experience.txt", "Role\nCompany\n2020\n- shipped");
        write_content(dir, "gallery.txt", "ghost.png");
        write_content(dir, "skills.txt", "Languages: Rust");
        write_content(dir, "contact.txt", "email: me@example.com");
        assert!(run(dir).is_err());
    }
}
