use itertools::iproduct;

use packed_image_filter::{
    pack, pack_into, testing, unpack, words_for_samples, PixelGrid, ShapeError,
};

#[test]
fn sample_position_inside_word() {
    // Samples 1..=18 of a 6x3 single-channel grid span two words.
    let samples: Vec<u8> = (1..=18).collect();
    let grid = PixelGrid::from_vec(6, 3, 1, samples).unwrap();

    let words = pack(&grid);
    assert_eq!(words.len(), 2);

    let mut expected = 0u128;
    for i in 0..16u32 {
        expected |= ((i + 1) as u128) << (8 * i);
    }
    assert_eq!(words[0], expected);
    assert_eq!(words[1], 17 | (18 << 8));
}

#[test]
fn trailing_bytes_of_last_word_are_zero() {
    let grid = PixelGrid::from_vec(3, 3, 1, vec![0xFF; 9]).unwrap();
    let words = pack(&grid);
    assert_eq!(words.len(), 1);
    // Nine bytes of 0xFF, the rest of the word is zero.
    assert_eq!(words[0], (1u128 << 72) - 1);
}

#[test]
fn word_count_matches_sample_count() {
    for (w, h, c) in iproduct!([1u32, 3, 16, 17], [1u32, 2, 16], [1u32, 2, 3, 4]) {
        let grid = testing::pseudo_random(w, h, c, 7);
        let words = pack(&grid);
        assert_eq!(words.len(), words_for_samples((w * h * c) as usize));
    }
}

#[test]
fn round_trip_preserves_samples() {
    for (w, h, c) in iproduct!([1u32, 5, 16, 31], [1u32, 4, 16], [1u32, 2, 3, 4]) {
        let grid = testing::pseudo_random(w, h, c, 42);
        let words = pack(&grid);
        let restored = unpack(&words, w, h, c).unwrap();
        assert_eq!(restored, grid);
    }
}

#[test]
fn unpack_ignores_extra_words() {
    let grid = testing::pseudo_random(4, 4, 1, 42);
    let mut words = pack(&grid);
    words.push(u128::MAX);
    assert_eq!(unpack(&words, 4, 4, 1).unwrap(), grid);
}

#[test]
fn unpack_with_zero_dimension() {
    assert_eq!(unpack(&[0], 0, 4, 1).unwrap_err(), ShapeError::ZeroDimension);
    assert_eq!(unpack(&[0], 4, 0, 1).unwrap_err(), ShapeError::ZeroDimension);
    assert_eq!(unpack(&[0], 4, 4, 0).unwrap_err(), ShapeError::ZeroDimension);
}

#[test]
fn unpack_from_small_buffer() {
    let words = vec![0u128; 15];
    let res = unpack(&words, 16, 16, 1);
    assert_eq!(res.unwrap_err(), ShapeError::InsufficientCapacity);
}

#[test]
fn pack_into_small_buffer() {
    let grid = testing::zeros(16, 16, 1);
    let mut words = vec![0u128; 15];
    let res = pack_into(&grid, &mut words);
    assert_eq!(res.unwrap_err(), ShapeError::InsufficientCapacity);
}

#[test]
fn pack_into_leaves_extra_words_untouched() {
    let grid = testing::filled(4, 1, 1, 1);
    let mut words = vec![u128::MAX; 2];
    pack_into(&grid, &mut words).unwrap();
    assert_eq!(words[0], 0x01010101);
    assert_eq!(words[1], u128::MAX);
}

#[test]
fn create_grid_from_small_vec() {
    let res = PixelGrid::from_vec(4, 4, 1, vec![0; 15]);
    assert_eq!(res.unwrap_err(), ShapeError::InsufficientCapacity);
}
