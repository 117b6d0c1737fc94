use smallvec::SmallVec;

use crate::geometry::{Point, Rect};

/// An arbitrary area made of disjoint, non-empty rectangles.
///
/// The decomposition is not canonical: two regions covering the same pixels
/// may hold different rectangle lists, so equality compares coverage rather
/// than the lists themselves.
#[derive(Debug, Clone, Default)]
pub struct Region {
    rects: SmallVec<[Rect; 4]>,
}

impl Region {
    /// The empty region
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rect(rect: Rect) -> Self {
        let mut rects = SmallVec::new();
        if !rect.is_empty() {
            rects.push(rect);
        }
        Self { rects }
    }

    /// Union of the given rectangles; overlapping inputs are fine.
    pub fn from_rects<I: IntoIterator<Item = Rect>>(rects: I) -> Self {
        let mut region = Self::new();
        for rect in rects {
            region.union_rect(rect);
        }
        region
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Number of covered unit cells
    pub fn area(&self) -> i64 {
        self.rects.iter().map(Rect::area).sum()
    }

    pub fn bounding_box(&self) -> Option<Rect> {
        let (first, rest) = self.rects.split_first()?;
        Some(rest.iter().fold(*first, |acc, r| acc.union_bounds(r)))
    }

    pub fn contains(&self, p: Point) -> bool {
        self.rects.iter().any(|r| r.contains(p))
    }

    pub fn contains_rect(&self, rect: &Rect) -> bool {
        Region::from_rect(*rect).subtract(self).is_empty()
    }

    pub fn union_rect(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let mut pieces: SmallVec<[Rect; 4]> = SmallVec::new();
        pieces.push(rect);
        for existing in &self.rects {
            pieces = pieces
                .iter()
                .flat_map(|piece| piece.subtract(existing))
                .collect();
            if pieces.is_empty() {
                return;
            }
        }
        self.rects.extend(pieces);
    }

    pub fn union(&self, other: &Region) -> Region {
        let mut out = self.clone();
        for rect in &other.rects {
            out.union_rect(*rect);
        }
        out
    }

    pub fn intersect(&self, other: &Region) -> Region {
        // Pairwise overlaps of two disjoint sets are themselves disjoint.
        let rects = self
            .rects
            .iter()
            .flat_map(|a| other.rects.iter().filter_map(move |b| a.intersect(b)))
            .collect();
        log::trace!(
            "Intersected regions of {} and {} rects",
            self.rects.len(),
            other.rects.len()
        );
        Region { rects }
    }

    pub fn intersect_rect(&self, rect: &Rect) -> Region {
        Region {
            rects: self.rects.iter().filter_map(|r| r.intersect(rect)).collect(),
        }
    }

    pub fn subtract_rect(&mut self, cut: &Rect) {
        self.rects = self.rects.iter().flat_map(|r| r.subtract(cut)).collect();
    }

    pub fn subtract(&self, other: &Region) -> Region {
        let mut out = self.clone();
        for cut in &other.rects {
            out.subtract_rect(cut);
            if out.is_empty() {
                break;
            }
        }
        out
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Region {
        Region {
            rects: self.rects.iter().map(|r| r.offset(dx, dy)).collect(),
        }
    }

    /// Apply `f` to every rectangle and union the results.
    ///
    /// Used to move a region between coordinate spaces, where `f` may flip
    /// or scale each rectangle.
    pub fn map_rects<F>(&self, mut f: F) -> Region
    where
        F: FnMut(Rect) -> Rect,
    {
        Region::from_rects(self.rects.iter().map(|r| f(*r)))
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.area() == other.area() && self.subtract(other).is_empty()
    }
}

impl Eq for Region {}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Region::from_rect(rect)
    }
}

impl FromIterator<Rect> for Region {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        Region::from_rects(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_disjoint(region: &Region) {
        let rects = region.rects();
        for (i, a) in rects.iter().enumerate() {
            assert!(!a.is_empty(), "empty rect {a} stored in region");
            for b in rects.iter().skip(i + 1) {
                assert!(!a.intersects(b), "{a} overlaps {b}");
            }
        }
    }

    #[test]
    fn test_empty_rect_gives_empty_region() {
        assert!(Region::from_rect(Rect::new(3, 3, 0, 10)).is_empty());
        assert_eq!(Region::new().bounding_box(), None);
    }

    #[test]
    fn test_union_overlapping() {
        let region = Region::from_rects([Rect::new(0, 0, 10, 10), Rect::new(5, 5, 10, 10)]);
        assert_disjoint(&region);
        assert_eq!(region.area(), 100 + 100 - 25);
        assert_eq!(region.bounding_box(), Some(Rect::new(0, 0, 15, 15)));
    }

    #[test]
    fn test_union_contained_is_noop() {
        let mut region = Region::from_rect(Rect::new(0, 0, 10, 10));
        region.union_rect(Rect::new(2, 2, 3, 3));
        assert_eq!(region.len(), 1);
    }

    #[test]
    fn test_intersect_regions() {
        let a = Region::from_rects([Rect::new(0, 0, 10, 10), Rect::new(20, 0, 10, 10)]);
        let b = Region::from_rect(Rect::new(5, 5, 20, 20));
        let both = a.intersect(&b);
        assert_disjoint(&both);
        assert_eq!(
            both,
            Region::from_rects([Rect::new(5, 5, 5, 5), Rect::new(20, 5, 5, 5)])
        );
    }

    #[test]
    fn test_disjoint_intersection_is_empty() {
        let a = Region::from_rect(Rect::new(0, 0, 5, 5));
        let b = Region::from_rect(Rect::new(5, 0, 5, 5));
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn test_subtract_and_contains() {
        let frame = Region::from_rect(Rect::new(0, 0, 10, 10))
            .subtract(&Region::from_rect(Rect::new(2, 2, 6, 6)));
        assert_disjoint(&frame);
        assert_eq!(frame.area(), 100 - 36);
        assert!(frame.contains(Point::new(1, 1)));
        assert!(!frame.contains(Point::new(5, 5)));
        assert!(frame.contains_rect(&Rect::new(0, 0, 10, 2)));
        assert!(!frame.contains_rect(&Rect::new(0, 0, 10, 3)));
    }

    #[test]
    fn test_equality_ignores_decomposition() {
        let split = Region::from_rects([Rect::new(0, 0, 5, 10), Rect::new(5, 0, 5, 10)]);
        let whole = Region::from_rect(Rect::new(0, 0, 10, 10));
        assert_eq!(split, whole);
        assert_ne!(split, Region::from_rect(Rect::new(0, 0, 10, 9)));
    }

    #[test]
    fn test_offset_and_map() {
        let region = Region::from_rect(Rect::new(0, 0, 4, 4)).offset(10, -2);
        assert_eq!(region.bounding_box(), Some(Rect::new(10, -2, 4, 4)));

        let doubled = region.map_rects(|r| Rect::new(r.x * 2, r.y * 2, r.width * 2, r.height * 2));
        assert_eq!(doubled.bounding_box(), Some(Rect::new(20, -4, 8, 8)));
    }
}
