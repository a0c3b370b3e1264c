//! Maven metadata fixtures

/// Renders a `maven-metadata.xml` document
pub fn maven_metadata(latest: Option<&str>, versions: &[&str]) -> String {
    let latest = latest
        .map(|latest| format!("    <latest>{}</latest>\n", latest))
        .unwrap_or_default();
    let versions: String = versions
        .iter()
        .map(|version| format!("      <version>{}</version>\n", version))
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata>
  <groupId>org.jetbrains.intellij.plugins</groupId>
  <artifactId>verifier-cli</artifactId>
  <versioning>
{latest}    <versions>
{versions}    </versions>
    <lastUpdated>20231003093021</lastUpdated>
  </versioning>
</metadata>
"#
    )
}
