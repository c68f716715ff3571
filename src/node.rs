/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve far less than `2^32` nodes.
This saves space compared to `usize`/`u64` and lets us manipulate node values
directly without abstracting over them.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
