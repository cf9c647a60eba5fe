//! Tests for slot grid extension including padding calculations and array copying

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use tilestitch::spatial::extension::{
        Extendable, ExtensionInfo, calculate_extension, extend_array_2d,
    };

    // Tests new slots start empty
    #[test]
    fn test_option_padding_is_none() {
        assert_eq!(Option::<u32>::padding_value(), None);
    }

    // Tests when coordinates are within bounds
    // Verified by forcing needs_extension to true
    #[test]
    fn test_calculate_extension_no_extension_needed() {
        let info = calculate_extension([3, 3], [1, 1], [1, -1]);

        assert!(!info.needs_extension);
        assert_eq!(info.pad_top, 0);
        assert_eq!(info.pad_bottom, 0);
        assert_eq!(info.pad_left, 0);
        assert_eq!(info.pad_right, 0);
        assert_eq!(info.new_offset, [1, 1]);
    }

    // Tests one step past the bottom right
    // Verified by off-by-one in the max bound
    #[test]
    fn test_calculate_extension_grows_bottom_right() {
        let info = calculate_extension([1, 1], [0, 0], [1, 1]);

        assert!(info.needs_extension);
        assert_eq!(info.pad_top, 0);
        assert_eq!(info.pad_bottom, 1);
        assert_eq!(info.pad_left, 0);
        assert_eq!(info.pad_right, 1);
        assert_eq!(info.new_offset, [0, 0]);
    }

    // Tests offset adjustment for negative coordinates
    // Verified by removing offset adjustment
    #[test]
    fn test_calculate_extension_grows_top_left() {
        let info = calculate_extension([2, 2], [0, 0], [-1, -2]);

        assert!(info.needs_extension);
        assert_eq!(info.pad_top, 1);
        assert_eq!(info.pad_bottom, 0);
        assert_eq!(info.pad_left, 2);
        assert_eq!(info.pad_right, 0);
        assert_eq!(info.new_offset, [1, 2]);
    }

    // Tests unchanged arrays are passed through
    #[test]
    fn test_extend_array_2d_no_extension() {
        let array = Array2::from_elem((2, 2), Some(5));
        let info = calculate_extension([2, 2], [0, 0], [1, 1]);

        let extended = extend_array_2d(array.clone(), &info);
        assert_eq!(extended, array);
    }

    // Tests values keep their world position and padding is empty
    // Verified by copying without the top/left shift
    #[test]
    fn test_extend_array_2d_preserves_values() {
        let mut array = Array2::from_elem((2, 2), None);
        if let Some(slot) = array.get_mut([0, 0]) {
            *slot = Some('a');
        }
        if let Some(slot) = array.get_mut([1, 1]) {
            *slot = Some('d');
        }

        let info = ExtensionInfo {
            pad_top: 1,
            pad_bottom: 0,
            pad_left: 0,
            pad_right: 2,
            new_offset: [1, 0],
            needs_extension: true,
        };
        let extended = extend_array_2d(array, &info);

        assert_eq!(extended.dim(), (3, 4));
        assert_eq!(extended.get([1, 0]), Some(&Some('a')));
        assert_eq!(extended.get([2, 1]), Some(&Some('d')));
        assert_eq!(extended.iter().filter(|slot| slot.is_some()).count(), 2);
        assert_eq!(extended.get([0, 0]), Some(&None));
    }
}
