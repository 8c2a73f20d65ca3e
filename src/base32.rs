//! Base32 transform between the two halves of the binary layout and their
//! fixed-width text blocks.

use crate::Error;

/// The 32-symbol encoding alphabet. Excludes I, L, O, and U.
pub(crate) const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Maps an input byte to its 5-bit symbol index, accepting either case.
const DECODE: [u8; 256] = {
    let mut table = [0xffu8; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        table[ALPHABET[i].to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encodes the 6-byte timestamp block into ten symbols.
///
/// The 48 input bits do not fill the 50 output bits, so the first symbol
/// carries only the top three bits.
pub(crate) const fn encode_time(src: &[u8; 6]) -> [u8; 10] {
    [
        ALPHABET[((src[0] & 0xe0) >> 5) as usize],
        ALPHABET[(src[0] & 0x1f) as usize],
        ALPHABET[((src[1] & 0xf8) >> 3) as usize],
        ALPHABET[(((src[1] & 0x07) << 2) | ((src[2] & 0xc0) >> 6)) as usize],
        ALPHABET[((src[2] & 0x3e) >> 1) as usize],
        ALPHABET[(((src[2] & 0x01) << 4) | ((src[3] & 0xf0) >> 4)) as usize],
        ALPHABET[(((src[3] & 0x0f) << 1) | ((src[4] & 0x80) >> 7)) as usize],
        ALPHABET[((src[4] & 0x7c) >> 2) as usize],
        ALPHABET[(((src[4] & 0x03) << 3) | ((src[5] & 0xe0) >> 5)) as usize],
        ALPHABET[(src[5] & 0x1f) as usize],
    ]
}

/// Encodes the 10-byte random block into sixteen symbols (80 bits, exact).
pub(crate) const fn encode_random(src: &[u8; 10]) -> [u8; 16] {
    [
        ALPHABET[((src[0] & 0xf8) >> 3) as usize],
        ALPHABET[(((src[0] & 0x07) << 2) | ((src[1] & 0xc0) >> 6)) as usize],
        ALPHABET[((src[1] & 0x3e) >> 1) as usize],
        ALPHABET[(((src[1] & 0x01) << 4) | ((src[2] & 0xf0) >> 4)) as usize],
        ALPHABET[(((src[2] & 0x0f) << 1) | ((src[3] & 0x80) >> 7)) as usize],
        ALPHABET[((src[3] & 0x7c) >> 2) as usize],
        ALPHABET[(((src[3] & 0x03) << 3) | ((src[4] & 0xe0) >> 5)) as usize],
        ALPHABET[(src[4] & 0x1f) as usize],
        ALPHABET[((src[5] & 0xf8) >> 3) as usize],
        ALPHABET[(((src[5] & 0x07) << 2) | ((src[6] & 0xc0) >> 6)) as usize],
        ALPHABET[((src[6] & 0x3e) >> 1) as usize],
        ALPHABET[(((src[6] & 0x01) << 4) | ((src[7] & 0xf0) >> 4)) as usize],
        ALPHABET[(((src[7] & 0x0f) << 1) | ((src[8] & 0x80) >> 7)) as usize],
        ALPHABET[((src[8] & 0x7c) >> 2) as usize],
        ALPHABET[(((src[8] & 0x03) << 3) | ((src[9] & 0xe0) >> 5)) as usize],
        ALPHABET[(src[9] & 0x1f) as usize],
    ]
}

/// Decodes a ten-symbol text block into the 6-byte timestamp block.
pub(crate) fn decode_time(src: &[u8]) -> Result<[u8; 6], Error> {
    let v = decode_symbols::<10>(src)?;
    Ok([
        (v[0] << 5) | v[1],
        (v[2] << 3) | (v[3] >> 2),
        (v[3] << 6) | (v[4] << 1) | (v[5] >> 4),
        (v[5] << 4) | (v[6] >> 1),
        (v[6] << 7) | (v[7] << 2) | (v[8] >> 3),
        (v[8] << 5) | v[9],
    ])
}

/// Decodes a sixteen-symbol text block into the 10-byte random block.
pub(crate) fn decode_random(src: &[u8]) -> Result<[u8; 10], Error> {
    let v = decode_symbols::<16>(src)?;
    Ok([
        (v[0] << 3) | (v[1] >> 2),
        (v[1] << 6) | (v[2] << 1) | (v[3] >> 4),
        (v[3] << 4) | (v[4] >> 1),
        (v[4] << 7) | (v[5] << 2) | (v[6] >> 3),
        (v[6] << 5) | v[7],
        (v[8] << 3) | (v[9] >> 2),
        (v[9] << 6) | (v[10] << 1) | (v[11] >> 4),
        (v[11] << 4) | (v[12] >> 1),
        (v[12] << 7) | (v[13] << 2) | (v[14] >> 3),
        (v[14] << 5) | v[15],
    ])
}

/// Looks up the 5-bit index of each input symbol.
fn decode_symbols<const N: usize>(src: &[u8]) -> Result<[u8; N], Error> {
    if src.len() != N {
        return Err(Error::InvalidLength);
    }

    let mut dst = [0u8; N];
    for (d, s) in dst.iter_mut().zip(src) {
        *d = DECODE[*s as usize];
        if *d == 0xff {
            return Err(Error::InvalidCharacter);
        }
    }
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::{decode_random, decode_time, encode_random, encode_time};
    use crate::Error;

    // 2016-07-30T23:54:10.259Z and the random payload of the reference text
    const TIME_BYTES: [u8; 6] = [0x01, 0x56, 0x3e, 0x3a, 0xb5, 0xd3];
    const RANDOM_BYTES: [u8; 10] = [0xd6, 0x76, 0x4c, 0x61, 0xef, 0xb9, 0x93, 0x02, 0xbd, 0x5b];

    /// Encodes the reference blocks correctly
    #[test]
    fn encodes_reference_blocks_correctly() {
        assert_eq!(&encode_time(&TIME_BYTES), b"01ARZ3NDEK");
        assert_eq!(&encode_random(&RANDOM_BYTES), b"TSV4RRFFQ69G5FAV");
    }

    /// Decodes the reference blocks correctly
    #[test]
    fn decodes_reference_blocks_correctly() {
        assert_eq!(decode_time(b"01ARZ3NDEK"), Ok(TIME_BYTES));
        assert_eq!(decode_random(b"TSV4RRFFQ69G5FAV"), Ok(RANDOM_BYTES));
    }

    /// Decodes lowercase input as the uppercase equivalent
    #[test]
    fn decodes_lowercase_input_as_uppercase_equivalent() {
        assert_eq!(decode_time(b"01arz3ndek"), Ok(TIME_BYTES));
        assert_eq!(decode_random(b"tsv4rrffq69g5fav"), Ok(RANDOM_BYTES));
    }

    /// Encodes the all-zero and all-one blocks to the extremes
    #[test]
    fn encodes_all_zero_and_all_one_blocks_to_extremes() {
        assert_eq!(&encode_time(&[0x00; 6]), b"0000000000");
        assert_eq!(&encode_random(&[0x00; 10]), b"0000000000000000");
        assert_eq!(&encode_time(&[0xff; 6]), b"7ZZZZZZZZZ");
        assert_eq!(&encode_random(&[0xff; 10]), b"ZZZZZZZZZZZZZZZZ");
    }

    /// Returns error to input of wrong length
    #[test]
    fn returns_error_to_input_of_wrong_length() {
        assert_eq!(decode_time(b""), Err(Error::InvalidLength));
        assert_eq!(decode_time(b"01ARZ3NDE"), Err(Error::InvalidLength));
        assert_eq!(decode_time(b"01ARZ3NDEKT"), Err(Error::InvalidLength));
        assert_eq!(decode_time(b"TSV4RRFFQ69G5FAV"), Err(Error::InvalidLength));
        assert_eq!(decode_random(b"01ARZ3NDEK"), Err(Error::InvalidLength));
        assert_eq!(
            decode_random(b"TSV4RRFFQ69G5FAVX"),
            Err(Error::InvalidLength)
        );
    }

    /// Returns error to symbols outside the alphabet
    #[test]
    fn returns_error_to_symbols_outside_alphabet() {
        for e in [
            &b"I1ARZ3NDEK"[..],
            b"0LARZ3NDEK",
            b"01ORZ3NDEK",
            b"01AUZ3NDEK",
            b"01ARZ3NDE!",
            b"01ARZ3 DEK",
            b"01ARZ3NDE\xff",
        ] {
            assert_eq!(decode_time(e), Err(Error::InvalidCharacter));
        }
        assert_eq!(
            decode_random(b"TSV4RRFFQ69G5FAu"),
            Err(Error::InvalidCharacter)
        );
    }

    /// Round-trips arbitrary blocks through text
    #[test]
    fn round_trips_arbitrary_blocks_through_text() {
        use rand::RngCore;
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let mut time = [0u8; 6];
            let mut random = [0u8; 10];
            rng.fill_bytes(&mut time);
            rng.fill_bytes(&mut random);
            assert_eq!(decode_time(&encode_time(&time)), Ok(time));
            assert_eq!(decode_random(&encode_random(&random)), Ok(random));
        }
    }

    /// Preserves block order through encoding
    #[test]
    fn preserves_block_order_through_encoding() {
        use rand::RngCore;
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let mut a = [0u8; 10];
            let mut b = [0u8; 10];
            rng.fill_bytes(&mut a);
            rng.fill_bytes(&mut b);
            assert_eq!(
                a.cmp(&b),
                encode_random(&a).cmp(&encode_random(&b)),
                "{:?} {:?}",
                a,
                b
            );
        }
    }
}
