use std::fs;

use predicates::prelude::*;

const DOC_JSON: &str = r#"{
  "nodeType": "document",
  "content": [
    { "nodeType": "heading-2", "content": [{ "nodeType": "text", "value": "Hi & Bye" }] },
    {
      "nodeType": "paragraph",
      "content": [
        {
          "nodeType": "text",
          "value": "emphasis",
          "marks": [{ "type": "bold" }, { "type": "italic" }]
        }
      ]
    },
    { "nodeType": "hr" }
  ]
}"#;

#[test]
fn render_prints_fragment_to_stdout() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let doc_path = temp.path().join("doc.json");
    fs::write(&doc_path, DOC_JSON)?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("folio");
    cmd.args(["render", "--doc", doc_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<h2>Hi &amp; Bye</h2><p><strong><em>emphasis</em></strong></p><hr />\n");

    Ok(())
}

#[test]
fn render_writes_fragment_file() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let doc_path = temp.path().join("doc.json");
    let out_path = temp.path().join("fragment.html");
    fs::write(&doc_path, DOC_JSON)?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("folio");
    cmd.args([
        "render",
        "--doc",
        doc_path.to_str().unwrap(),
        "--out",
        out_path.to_str().unwrap(),
    ])
    .assert()
    .success();

    let fragment = fs::read_to_string(&out_path)?;
    assert_eq!(
        fragment,
        "<h2>Hi &amp; Bye</h2><p><strong><em>emphasis</em></strong></p><hr />"
    );

    Ok(())
}

#[test]
fn render_rejects_missing_document() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("folio");
    cmd.args(["render", "--doc", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read rich text document"));
}
