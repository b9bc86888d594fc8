//! `folio spec` — print the content file format.

const FULL: &str = r#"folio content format
====================

A content directory holds two subdirectories:

  texts/    the portfolio text files listed below
  images/   every image referenced from them

texts/texts.txt — About
-----------------------
Free text. Rendered as one paragraph; line breaks are preserved.

texts/projects.txt — Projects
-----------------------------
Blocks separated by blank lines. Blocks starting with /* are comments and
everything from a /* line to the end of its block is ignored. Lines starting
with // are ignored. Each block needs at least 3 lines:

  line 1        project title
  line 2        subtitle (blocks of exactly 3 lines have no subtitle)
  middle lines  description (may span several lines)
  last line     comma-separated image filenames

Blocks with fewer than 3 remaining lines are skipped with a warning.

texts/experience.txt — Work experience
--------------------------------------
Blocks separated by blank lines, // lines ignored. Each block:

  line 1        role title
  line 2        company
  line 3        date range
  further lines responsibilities; lines starting with - begin a new bullet,
                other lines continue the previous bullet

texts/gallery.txt — Gallery
---------------------------
One image filename per line. Blank lines and lines starting with # are
ignored. Order and duplicates are preserved.

texts/skills.txt — Skills
-------------------------
One category per line, "Name: item, item, item". The first colon splits the
category name from its members. Lines without a colon are collected into a
shared unnamed category.

texts/contact.txt — Contact
---------------------------
One entry per line, "kind: value". Blank lines and // lines are ignored.
Recognized kinds: email, phone, linkedin, github, itchio, website, twitter,
instagram, facebook (case and punctuation in the kind are ignored).

  email         linked as mailto:value
  phone         linked as tel:value (whitespace stripped)
  value http…   linked as-is, opened externally
  value www…    linked with https:// prefixed, opened externally
  anything else shown as plain text

Lines without ": " are shown as plain text.
"#;

const SHORT: &str = r#"folio content quick reference
  texts/texts.txt        free text (About)
  texts/projects.txt     blank-line blocks: title / subtitle / description… / images
  texts/experience.txt   blank-line blocks: role / company / dates / - bullets
  texts/gallery.txt      one image filename per line (# comments)
  texts/skills.txt       Name: item, item  (colon-less lines -> unnamed category)
  texts/contact.txt      kind: value  (email, phone, linkedin, github, …)
  comments               // line comments; /* starts a comment block (projects)
"#;

pub fn run(short: bool) {
    if short {
        print!("{SHORT}");
    } else {
        print!("{FULL}");
    }
}
