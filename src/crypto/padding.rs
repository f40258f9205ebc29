//! Manual block padding
//!
//! The portal expects PKCS#7-style padding applied by the caller, with the
//! cipher's own padding disabled. The pad length is always computed on the
//! UTF-8 byte length of the buffer, never on a character count.

use super::aes::BLOCK_SIZE;

/// Number of pad bytes needed to bring `len` to a multiple of the block size
///
/// Always in `1..=BLOCK_SIZE`: an aligned length gets a full block.
pub fn pad_length(len: usize) -> usize {
    BLOCK_SIZE - (len % BLOCK_SIZE)
}

/// Append `N` bytes of value `N` to `data`
pub fn pad(data: &mut Vec<u8>) {
    let n = pad_length(data.len());
    data.resize(data.len() + n, n as u8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_length_range() {
        assert_eq!(pad_length(0), 16);
        assert_eq!(pad_length(1), 15);
        assert_eq!(pad_length(15), 1);
        assert_eq!(pad_length(16), 16);
        assert_eq!(pad_length(17), 15);
        assert_eq!(pad_length(31), 1);
        assert_eq!(pad_length(32), 16);
    }

    #[test]
    fn test_pad_one_short() {
        let mut data = vec![b'a'; 15];
        pad(&mut data);
        assert_eq!(data.len(), 16);
        assert_eq!(data[15], 1);
    }

    #[test]
    fn test_pad_aligned_adds_full_block() {
        let mut data = vec![b'a'; 32];
        pad(&mut data);
        assert_eq!(data.len(), 48);
        assert!(data[32..].iter().all(|&b| b == 16));
    }

    #[test]
    fn test_pad_uses_byte_length() {
        // 5 chars, 10 bytes in UTF-8
        let mut data = "ПРИВЕ".as_bytes().to_vec();
        assert_eq!(data.len(), 10);
        pad(&mut data);
        assert_eq!(data.len(), 16);
        assert!(data[10..].iter().all(|&b| b == 6));
    }
}
