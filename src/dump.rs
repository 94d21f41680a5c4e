/*!
 * Assembles the tree listing and file contents into the final text
 */

use std::path::Path;

use crate::error::Result;
use crate::serializer::Serializer;
use crate::tree::render_tree;
use crate::types::{delimiter, ContentBlock, RenderedTree};

/// Render the full dump of `root`: tree, separator, then one block per file
pub fn render_dump(root: &Path, serializer: &mut Serializer) -> Result<String> {
    let tree = render_tree(root)?;
    let blocks = serializer.serialize(root)?;
    Ok(assemble(&tree, &blocks))
}

/// Join the tree, the separator and the content blocks with newlines
pub fn assemble(tree: &RenderedTree, blocks: &[ContentBlock]) -> String {
    let mut parts = Vec::with_capacity(blocks.len() + 2);
    parts.push(tree.to_string());
    parts.push(format!("\n{}\n", delimiter()));
    parts.extend(blocks.iter().map(ContentBlock::render));
    parts.join("\n")
}
