//! Contract generation for downstream consumers.
//!
//! The contract is the exposure surface of a tree rendered as nested JSON:
//! every exposed field appears under its path with its effective value,
//! whether it may be overridden, and where the value came from. Hidden
//! fields and containers whose entire sub-tree is hidden are omitted.

use serde_json::{json, Map, Value};

use crate::tree::FieldNode;

/// Renders the exposed surface of `tree` as a nested JSON object.
///
/// Leaves become `{"value", "overridable", "source"}` records; containers
/// become objects holding their exposed children. A container that ends up
/// with no exposed content contributes nothing, so the contract never
/// carries empty objects.
///
/// # Examples
///
/// ```
/// use fieldscope::{FieldNode, FieldPath, FieldType};
/// use fieldscope::contract::generate_exposed_contract;
/// use serde_json::json;
///
/// let tag = FieldNode::new("tag", FieldPath::parse("image.tag").unwrap(), FieldType::String)
///     .with_exposed(true)
///     .with_value(Some(json!("v1.2.3")));
/// let image = FieldNode::new("image", FieldPath::parse("image").unwrap(), FieldType::Object)
///     .with_exposed(true)
///     .with_children(vec![tag]);
///
/// let contract = generate_exposed_contract(&[image]);
/// assert_eq!(contract["image"]["tag"]["value"], json!("v1.2.3"));
/// assert_eq!(contract["image"]["tag"]["overridable"], json!(false));
/// ```
#[must_use]
pub fn generate_exposed_contract(tree: &[FieldNode]) -> Value {
    Value::Object(contract_object(tree))
}

fn contract_object(nodes: &[FieldNode]) -> Map<String, Value> {
    let mut object = Map::new();
    for node in nodes {
        if !node.exposed {
            continue;
        }
        if node.is_object() || !node.children.is_empty() {
            let inner = contract_object(&node.children);
            if !inner.is_empty() {
                object.insert(node.key.clone(), Value::Object(inner));
            }
        } else {
            object.insert(node.key.clone(), leaf_record(node));
        }
    }
    object
}

fn leaf_record(node: &FieldNode) -> Value {
    json!({
        "value": node.value.clone().unwrap_or(Value::Null),
        "overridable": node.overridable,
        "source": node.source,
    })
}
