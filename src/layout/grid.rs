//! The "organize" grid: fills rows left to right, then stacks diagonally
//! once a row would drop past the bottom of the viewport.

use super::{Point, Size, Viewport, saturate_i32};
use crate::constants::{
    CARD_HEIGHT, CARD_WIDTH, GRID_GAP, GRID_ORIGIN_X, GRID_ORIGIN_Y, GRID_PADDING,
    STACK_GROUP_SIZE, STACK_STEP,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub card: Size,
    pub gap: u32,
    pub padding: u32,
    pub origin: Point,
    pub stack_group: usize,
    pub stack_step: i32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            card: Size::new(CARD_WIDTH, CARD_HEIGHT),
            gap: GRID_GAP,
            padding: GRID_PADDING,
            origin: Point::new(GRID_ORIGIN_X, GRID_ORIGIN_Y),
            stack_group: STACK_GROUP_SIZE,
            stack_step: STACK_STEP,
        }
    }
}

/// Number of grid columns that fit the viewport width. Never zero.
pub fn grid_columns(viewport_width: u32, spec: &GridSpec) -> usize {
    let usable = viewport_width.saturating_sub(spec.padding.saturating_mul(2));
    let stride = spec.card.width.saturating_add(spec.gap).max(1);
    ((usable / stride) as usize).max(1)
}

/// Position of the `index`-th participant for a grid of `columns` columns.
pub fn grid_slot(index: usize, columns: usize, viewport: Viewport, spec: &GridSpec) -> Point {
    let columns = columns.max(1);
    let row = (index / columns) as i64;
    let col = (index % columns) as i64;
    let stride_x = spec.card.width as i64 + spec.gap as i64;
    let stride_y = spec.card.height as i64 + spec.gap as i64;
    let x = spec.origin.x as i64 + col * stride_x;
    let y = spec.origin.y as i64 + row * stride_y;

    if y + spec.card.height as i64 > viewport.height as i64 {
        return stacked_slot(index, spec);
    }
    Point::new(saturate_i32(x), saturate_i32(y))
}

/// Overflow fallback: every `stack_group` windows share one slot, and each
/// group steps diagonally away from the origin so its top-left corner stays
/// clickable.
pub fn stacked_slot(index: usize, spec: &GridSpec) -> Point {
    let group = (index / spec.stack_group.max(1)) as i64;
    let step = group * spec.stack_step as i64;
    Point::new(
        saturate_i32(spec.origin.x as i64 + step),
        saturate_i32(spec.origin.y as i64 + step),
    )
}

/// Lay out `ids` in order. The caller decides who participates; every id
/// passed in receives exactly one position.
pub fn organize_grid<Id, I>(viewport: Viewport, ids: I, spec: &GridSpec) -> Vec<(Id, Point)>
where
    I: IntoIterator<Item = Id>,
{
    let columns = grid_columns(viewport.width, spec);
    ids.into_iter()
        .enumerate()
        .map(|(index, id)| (id, grid_slot(index, columns, viewport, spec)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_windows_on_a_1200_wide_viewport_use_two_columns() {
        let spec = GridSpec::default();
        let viewport = Viewport::new(1200, 1800);
        assert_eq!(grid_columns(viewport.width, &spec), 2);

        let layout = organize_grid(viewport, 0..5usize, &spec);
        let positions: Vec<Point> = layout.iter().map(|(_, p)| *p).collect();
        assert_eq!(
            positions,
            vec![
                Point::new(20, 80),
                Point::new(424, 80),
                Point::new(20, 600),
                Point::new(424, 600),
                Point::new(20, 1120),
            ]
        );

        // deterministic on repeat
        assert_eq!(organize_grid(viewport, 0..5usize, &spec), layout);
    }

    #[test]
    fn narrow_viewport_still_gets_one_column() {
        let spec = GridSpec::default();
        assert_eq!(grid_columns(0, &spec), 1);
        assert_eq!(grid_columns(100, &spec), 1);

        let zero_stride = GridSpec {
            card: Size::new(0, 10),
            gap: 0,
            ..GridSpec::default()
        };
        assert_eq!(grid_columns(500, &zero_stride), 500 - 48);
    }

    #[test]
    fn rows_past_the_bottom_edge_fall_back_to_stacking() {
        let spec = GridSpec::default();
        let viewport = Viewport::new(1200, 1000);
        let layout = organize_grid(viewport, 0..5usize, &spec);
        assert_eq!(layout[0].1, Point::new(20, 80));
        assert_eq!(layout[1].1, Point::new(424, 80));
        // row 1 would end at y=1100 > 1000
        assert_eq!(layout[2].1, Point::new(20, 80));
        assert_eq!(layout[4].1, Point::new(20, 80));
    }

    #[test]
    fn stack_groups_step_diagonally() {
        let spec = GridSpec::default();
        let viewport = Viewport::new(400, 300);
        let layout = organize_grid(viewport, 0..25usize, &spec);
        assert_eq!(layout[9].1, Point::new(20, 80));
        assert_eq!(layout[10].1, Point::new(50, 110));
        assert_eq!(layout[24].1, Point::new(80, 140));
    }
}
