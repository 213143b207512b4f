pub mod error;
pub mod node;
pub mod reader;
pub mod splitter;

pub use error::IngestError;
pub use node::{Node, NodeType, PropertyValue, PAGE_CONTENT};
pub use reader::FileReader;
pub use splitter::{split_text_by_token_limit, TokenSplitter, DEFAULT_MAX_TOKEN_LIMIT};

use std::path::Path;

/// Property recording where a document node was read from
pub const SOURCE: &str = "source";

fn document_node(path: &str, content: String) -> Node {
    let mut node = Node::document(content);
    node.add_property(SOURCE, PropertyValue::Text(path.to_string()));
    node
}

/// Read one file into a document node
pub async fn ingest_file(file_path: &Path) -> Result<Node, IngestError> {
    let content = FileReader::read_file(file_path).await?;
    let path_str = file_path.to_string_lossy().to_string();

    Ok(document_node(&path_str, content))
}

/// Ingest a single file or every supported file under a directory
pub async fn ingest_path(path: &Path) -> Result<Vec<Node>, IngestError> {
    if path.is_file() {
        return Ok(vec![ingest_file(path).await?]);
    }

    let files = FileReader::read_directory(path).await?;
    let nodes = files
        .into_iter()
        .map(|(path, content)| document_node(&path, content))
        .collect();

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ingest_directory_reads_supported_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.md"), "# Руководство MCX 500").unwrap();
        std::fs::write(dir.path().join("a.txt"), "Комбайн AFS 800").unwrap();
        std::fs::write(dir.path().join("image.png"), [0u8, 1, 2]).unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/c.txt"), "Сенсоры YieldMaster").unwrap();

        let nodes = ingest_path(dir.path()).await.unwrap();

        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].page_content(), Some("Комбайн AFS 800"));
        assert_eq!(nodes[1].page_content(), Some("# Руководство MCX 500"));
        assert_eq!(nodes[2].page_content(), Some("Сенсоры YieldMaster"));
        assert!(nodes[0].text_property(SOURCE).unwrap().ends_with("a.txt"));
    }

    #[tokio::test]
    async fn test_ingest_file_rejects_unknown_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        std::fs::write(&path, "pdf").unwrap();

        let err = ingest_file(&path).await.unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat(ext) if ext == "pdf"));
    }
}
