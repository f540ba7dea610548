use serde::{Deserialize, Serialize};

/// A message type permitted for EIP-712 typed-data signing.
///
/// Descriptors are opaque to parameter validation beyond their structure; the
/// signing collaborator interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip712AllowedMsg {
    /// Type url of the wrapped message, e.g. `/cosmos.bank.v1beta1.MsgSend`.
    pub msg_type_url: String,
    /// EIP-712 type name of the message value, e.g. `MsgValueSend`.
    pub msg_value_type_name: String,
    /// Attributes of the message value type.
    pub value_types: Vec<Eip712MsgAttrType>,
    /// Types referenced from the message value attributes.
    pub nested_types: Vec<Eip712NestedMsgType>,
}

/// A type referenced from an EIP-712 message value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip712NestedMsgType {
    /// Type name, e.g. `Coin`.
    pub name: String,
    /// Attributes of the type.
    pub attrs: Vec<Eip712MsgAttrType>,
}

/// A single name/type attribute of an EIP-712 message type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip712MsgAttrType {
    /// Attribute name.
    pub name: String,
    /// EIP-712 type of the attribute, e.g. `uint256`.
    #[serde(rename = "type")]
    pub attr_type: String,
}
