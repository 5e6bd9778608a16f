use crate::domain::Grid;

/// Number of colour channels in a render buffer
pub const CHANNELS: usize = 3;

/// Brightness projection of a grid for an external presentation layer.
///
/// Values are in `[0, 1]`, three equal channels per cell, laid out
/// column-major as `(x * height + y) * 3 + channel`.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderBuffer {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl RenderBuffer {
    /// Project every cell of `grid`; always a full pass
    pub fn from_grid(grid: &Grid) -> Self {
        let (width, height) = grid.dimensions();
        let data = (0..width)
            .flat_map(|x| (0..height).map(move |y| (x, y)))
            .flat_map(|(x, y)| {
                let value = grid.get(x, y).map_or(0.0, |cell| cell.brightness());
                [value; CHANNELS]
            })
            .collect();
        Self { width, height, data }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Channel values of the pixel at `(x, y)`
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f32; CHANNELS]> {
        (x < self.width && y < self.height).then(|| {
            let idx = (x * self.height + y) * CHANNELS;
            [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
        })
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Scale to the 0-255 display range
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.iter().map(|&v| (v * 255.0) as u8).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn test_projection_layout() {
        let mut grid = Grid::new(3, 2);
        grid.set(2, 1, Cell::Alive);

        let buffer = RenderBuffer::from_grid(&grid);
        assert_eq!(buffer.dimensions(), (3, 2));
        assert_eq!(buffer.as_slice().len(), 3 * 2 * CHANNELS);
        assert_eq!(buffer.pixel(2, 1), Some([1.0; 3]));
        assert_eq!(buffer.pixel(1, 1), Some([0.0; 3]));
        assert_eq!(buffer.pixel(3, 0), None);

        // Last pixel in (x, y, channel) order
        assert_eq!(&buffer.as_slice()[15..], &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_values_in_unit_range() {
        let grid = Grid::from_fn(7, 5, |x, y| Cell::from((x + y) % 2 == 0));
        let buffer = RenderBuffer::from_grid(&grid);
        assert!(buffer.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_bytes() {
        let grid = Grid::from_fn(2, 1, |x, _| Cell::from(x == 0));
        let bytes = RenderBuffer::from_grid(&grid).to_bytes();
        assert_eq!(bytes, vec![255, 255, 255, 0, 0, 0]);
    }
}
