//! Frame chunking for multi-part uploads
//!
//! A payload larger than one protocol frame is streamed to the device as an
//! ordered sequence of chunks, each tagged with its position in P1. The
//! device accumulates Init, Add*, Last strictly in that order and only
//! processes the upload once the Last frame arrives.

use bytes::Bytes;

use crate::constants::CHUNK_SIZE;

/// Position of a chunk within a multi-frame upload, carried as P1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChunkType {
    /// First frame of an upload.
    Init = 0,
    /// Interior frame.
    Add = 1,
    /// Final frame; triggers processing on the device.
    Last = 2,
}

impl ChunkType {
    /// Tag for the chunk at `index` out of `total`.
    ///
    /// The final chunk is always `Last`, even when it is also the first.
    pub const fn for_index(index: usize, total: usize) -> Self {
        if index + 1 == total {
            Self::Last
        } else if index == 0 {
            Self::Init
        } else {
            Self::Add
        }
    }
}

impl From<ChunkType> for u8 {
    fn from(chunk_type: ChunkType) -> Self {
        chunk_type as Self
    }
}

/// Split `message` into frame-sized chunks, preceded by the serialized
/// path when one is supplied.
///
/// The path chunk is carried verbatim as chunk 0 and never subdivided (it
/// is far below the frame bound by construction). Message chunks follow in
/// input order, each exactly [`CHUNK_SIZE`] bytes except a possibly
/// shorter final one; an empty trailing chunk is never produced, and an
/// empty message yields no message chunks at all.
pub fn prepare_chunks(message: &[u8], path: Option<Bytes>) -> Vec<Bytes> {
    let mut chunks = Vec::with_capacity(usize::from(path.is_some()) + message.len().div_ceil(CHUNK_SIZE));

    if let Some(path) = path {
        chunks.push(path);
    }

    let message = Bytes::copy_from_slice(message);
    let mut offset = 0;
    while offset < message.len() {
        let end = usize::min(offset + CHUNK_SIZE, message.len());
        chunks.push(message.slice(offset..end));
        offset = end;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple_produces_no_empty_tail() {
        let message = vec![0xAB; 3 * CHUNK_SIZE];
        let chunks = prepare_chunks(&message, None);

        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|chunk| chunk.len() == CHUNK_SIZE));
    }

    #[test]
    fn empty_message_yields_no_message_chunks() {
        assert!(prepare_chunks(&[], None).is_empty());

        let path = Bytes::from_static(&[4, 0, 0, 0, 1]);
        let chunks = prepare_chunks(&[], Some(path.clone()));
        assert_eq!(chunks, vec![path]);
    }

    #[test]
    fn path_chunk_is_carried_verbatim() {
        let path = Bytes::copy_from_slice(&[0u8; 17]);
        let message = vec![0xCD; 10];
        let chunks = prepare_chunks(&message, Some(path));

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 17);
        assert_eq!(chunks[1].len(), 10);
        assert_eq!(chunks[1].as_ref(), &message[..]);
    }

    #[test]
    fn long_message_preserves_order_and_sizes() {
        let message: Vec<u8> = (0..CHUNK_SIZE + 7).map(|i| i as u8).collect();
        let chunks = prepare_chunks(&message, None);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].as_ref(), &message[..CHUNK_SIZE]);
        assert_eq!(chunks[1].as_ref(), &message[CHUNK_SIZE..]);
    }

    #[test]
    fn tags_follow_position() {
        assert_eq!(ChunkType::for_index(0, 3), ChunkType::Init);
        assert_eq!(ChunkType::for_index(1, 3), ChunkType::Add);
        assert_eq!(ChunkType::for_index(2, 3), ChunkType::Last);
    }

    #[test]
    fn single_chunk_is_tagged_last_not_init() {
        assert_eq!(ChunkType::for_index(0, 1), ChunkType::Last);
    }

    #[test]
    fn tags_map_to_wire_values() {
        assert_eq!(u8::from(ChunkType::Init), 0);
        assert_eq!(u8::from(ChunkType::Add), 1);
        assert_eq!(u8::from(ChunkType::Last), 2);
    }
}
