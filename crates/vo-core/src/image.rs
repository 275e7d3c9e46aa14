use crate::Error;

/// Borrowed row-major view with element stride.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a [T],
}

impl<'a, T> ImageView<'a, T> {
    pub fn from_slice(
        width: usize,
        height: usize,
        stride: usize,
        data: &'a [T],
    ) -> Result<Self, Error> {
        if stride < width {
            return Err(Error::InvalidStride);
        }

        let min_len = min_required_len(width, height, stride).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() < min_len {
            return Err(Error::SizeMismatch {
                expected: min_len,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row(&self, y: usize) -> &'a [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }
}

// The last row only needs `width` elements, so a padded buffer may omit the
// trailing padding.
fn min_required_len(width: usize, height: usize, stride: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return Some(0);
    }

    let rows_before_last = height.checked_sub(1)?;
    let base = rows_before_last.checked_mul(stride)?;
    base.checked_add(width)
}

#[cfg(test)]
mod tests {
    use super::ImageView;
    use crate::Error;

    #[test]
    fn view_indexing_with_stride() {
        let data = vec![1u8, 2, 3, 99, 4, 5, 6, 88];
        let view = ImageView::from_slice(3, 2, 4, &data).expect("valid view");

        assert_eq!(view.row(0), &[1, 2, 3]);
        assert_eq!(view.row(1), &[4, 5, 6]);
        assert_eq!(view.width(), 3);
        assert_eq!(view.height(), 2);
    }

    #[test]
    fn last_row_padding_is_optional() {
        // 3 wide, stride 4, trailing padding of the last row omitted.
        let data = vec![1u8, 2, 3, 0, 4, 5, 6];
        let view = ImageView::from_slice(3, 2, 4, &data).expect("valid view");
        assert_eq!(view.row(1), &[4, 5, 6]);
    }

    #[test]
    fn rejects_short_buffer_and_bad_stride() {
        let data = vec![0u8; 5];
        assert_eq!(
            ImageView::from_slice(3, 2, 3, &data).unwrap_err(),
            Error::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
        assert_eq!(
            ImageView::from_slice(3, 1, 2, &data).unwrap_err(),
            Error::InvalidStride
        );
    }

    #[test]
    #[should_panic(expected = "row index out of bounds")]
    fn row_out_of_range_panics() {
        let data = vec![0u8; 4];
        let view = ImageView::from_slice(2, 2, 2, &data).expect("valid view");
        let _ = view.row(2);
    }
}
