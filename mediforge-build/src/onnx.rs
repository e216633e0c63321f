//! Minimal ONNX encoder for the identity placeholder model.
//!
//! Only the protobuf fields needed to describe a single-node graph are
//! emitted. Field numbers follow `onnx.proto`:
//!
//! ```text
//! ModelProto      1 ir_version  2 producer_name  3 producer_version  7 graph  8 opset_import
//! GraphProto      1 node  2 name  11 input  12 output
//! NodeProto       1 input  2 output  3 name  4 op_type
//! ValueInfoProto  1 name  2 type
//! TypeProto       1 tensor_type { 1 elem_type  2 shape { 1 dim { 1 dim_value } } }
//! OperatorSetId   1 domain  2 version
//! ```

const WIRE_VARINT: u8 = 0;
const WIRE_LEN: u8 = 2;

/// `TensorProto.DataType.FLOAT`.
const ELEM_TYPE_FLOAT: u64 = 1;

/// IR version paired with opset 11.
const IR_VERSION: u64 = 6;

fn put_varint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

fn put_tag(buf: &mut Vec<u8>, field: u32, wire: u8) {
    put_varint(buf, (u64::from(field) << 3) | u64::from(wire));
}

/// Protobuf message under construction.
#[derive(Debug, Default)]
struct Message {
    buf: Vec<u8>,
}

impl Message {
    fn varint(mut self, field: u32, value: u64) -> Self {
        put_tag(&mut self.buf, field, WIRE_VARINT);
        put_varint(&mut self.buf, value);
        self
    }

    fn bytes(mut self, field: u32, value: &[u8]) -> Self {
        put_tag(&mut self.buf, field, WIRE_LEN);
        put_varint(&mut self.buf, value.len() as u64);
        self.buf.extend_from_slice(value);
        self
    }

    fn string(self, field: u32, value: &str) -> Self {
        self.bytes(field, value.as_bytes())
    }

    fn message(self, field: u32, value: Message) -> Self {
        self.bytes(field, &value.buf)
    }

    fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// A graph whose single `Identity` node maps float input `x` to output `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityModel {
    pub input_dims: Vec<u64>,
    pub opset: u64,
}

impl Default for IdentityModel {
    fn default() -> Self {
        Self {
            input_dims: vec![1, 10],
            opset: 11,
        }
    }
}

impl IdentityModel {
    fn value_info(&self, name: &str) -> Message {
        let shape = self
            .input_dims
            .iter()
            .fold(Message::default(), |shape, dim| {
                shape.message(1, Message::default().varint(1, *dim))
            });
        let tensor = Message::default()
            .varint(1, ELEM_TYPE_FLOAT)
            .message(2, shape);
        Message::default()
            .string(1, name)
            .message(2, Message::default().message(1, tensor))
    }

    /// Serialized `ModelProto` bytes.
    pub fn to_onnx(&self) -> Vec<u8> {
        let node = Message::default()
            .string(1, "x")
            .string(2, "y")
            .string(3, "identity")
            .string(4, "Identity");
        let graph = Message::default()
            .message(1, node)
            .string(2, "placeholder")
            .message(11, self.value_info("x"))
            .message(12, self.value_info("y"));
        let opset = Message::default().string(1, "").varint(2, self.opset);

        Message::default()
            .varint(1, IR_VERSION)
            .string(2, "mediforge")
            .string(3, env!("CARGO_PKG_VERSION"))
            .message(7, graph)
            .message(8, opset)
            .into_bytes()
    }
}
