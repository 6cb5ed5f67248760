//! Surface area of voxel solids, split into faces that touch open air and
//! faces that border sealed cavities.

use std::collections::VecDeque;

use itertools::{Itertools, MinMaxResult};
use rustc_hash::FxHashSet;

use super::geometry::Cube;

/// Inclusive axis-aligned box of cubes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Cube,
    pub max: Cube,
}

impl Bounds {
    pub fn contains(&self, c: Cube) -> bool {
        (self.min.x..=self.max.x).contains(&c.x)
            && (self.min.y..=self.max.y).contains(&c.y)
            && (self.min.z..=self.max.z).contains(&c.z)
    }

    /// Grow every face outward by `by` cubes.
    pub fn expanded(self, by: i64) -> Bounds {
        Bounds {
            min: Cube::new(self.min.x - by, self.min.y - by, self.min.z - by),
            max: Cube::new(self.max.x + by, self.max.y + by, self.max.z + by),
        }
    }

    pub fn cubes(&self) -> impl Iterator<Item = Cube> + use<> {
        let Bounds { min, max } = *self;
        (min.z..=max.z).flat_map(move |z| {
            (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| Cube::new(x, y, z)))
        })
    }
}

fn axis_range(values: impl Iterator<Item = i64>) -> Option<(i64, i64)> {
    match values.minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}

/// A finite set of filled unit cubes.
///
/// ```
/// use aoc_solutions::utils::voxel::Droplet;
/// use aoc_solutions::utils::geometry::Cube;
///
/// let droplet: Droplet = [Cube::new(1, 1, 1), Cube::new(2, 1, 1)].into_iter().collect();
/// assert_eq!(droplet.total_surface(), 10);
/// assert_eq!(droplet.exterior_surface(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Droplet {
    cubes: FxHashSet<Cube>,
}

impl FromIterator<Cube> for Droplet {
    fn from_iter<I: IntoIterator<Item = Cube>>(iter: I) -> Self {
        Self {
            cubes: iter.into_iter().collect(),
        }
    }
}

impl Droplet {
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    pub fn contains(&self, c: Cube) -> bool {
        self.cubes.contains(&c)
    }

    /// Tight bounding box, `None` for an empty droplet.
    pub fn bounds(&self) -> Option<Bounds> {
        let (x0, x1) = axis_range(self.cubes.iter().map(|c| c.x))?;
        let (y0, y1) = axis_range(self.cubes.iter().map(|c| c.y))?;
        let (z0, z1) = axis_range(self.cubes.iter().map(|c| c.z))?;
        Some(Bounds {
            min: Cube::new(x0, y0, z0),
            max: Cube::new(x1, y1, z1),
        })
    }

    fn open_faces(&self) -> impl Iterator<Item = Cube> + '_ {
        self.cubes
            .iter()
            .flat_map(|c| c.face_neighbours())
            .filter(|n| !self.cubes.contains(n))
    }

    /// Faces not shared with another filled cube.
    pub fn total_surface(&self) -> usize {
        self.open_faces().count()
    }

    /// Faces whose empty neighbour connects through empty cubes to the
    /// outside of the bounding box.
    pub fn exterior_surface(&self) -> usize {
        let Some(mut classifier) = Classifier::new(self) else {
            return 0;
        };
        let count = self.open_faces().filter(|&n| classifier.is_exterior(n)).count();
        classifier.log_sizes();
        count
    }

    /// Empty cubes sealed off from the outside.
    pub fn cavities(&self) -> FxHashSet<Cube> {
        let Some(mut classifier) = Classifier::new(self) else {
            return FxHashSet::default();
        };
        for c in classifier.bounds.cubes() {
            if !self.cubes.contains(&c) {
                classifier.is_exterior(c);
            }
        }
        classifier.log_sizes();
        classifier.interior
    }
}

/// Flood-fill classifier with memoised outcomes.
///
/// Every empty cube visited by a flood is recorded as exterior or interior,
/// so later floods stop as soon as they touch a known region.
struct Classifier<'a> {
    droplet: &'a Droplet,
    bounds: Bounds,
    exterior: FxHashSet<Cube>,
    interior: FxHashSet<Cube>,
}

impl<'a> Classifier<'a> {
    fn new(droplet: &'a Droplet) -> Option<Self> {
        Some(Self {
            droplet,
            bounds: droplet.bounds()?,
            exterior: FxHashSet::default(),
            interior: FxHashSet::default(),
        })
    }

    fn is_exterior(&mut self, start: Cube) -> bool {
        if self.exterior.contains(&start) {
            return true;
        }
        if self.interior.contains(&start) {
            return false;
        }

        let mut visited = FxHashSet::default();
        visited.insert(start);
        let mut queue = VecDeque::from([start]);
        let mut escaped = false;

        while let Some(c) = queue.pop_front() {
            if !self.bounds.contains(c) || self.exterior.contains(&c) {
                escaped = true;
                break;
            }
            for n in c.face_neighbours() {
                if !self.droplet.contains(n) && visited.insert(n) {
                    queue.push_back(n);
                }
            }
        }

        log::trace!(
            "flood from {start:?} visited {} cubes, exterior: {escaped}",
            visited.len()
        );
        if escaped {
            self.exterior.extend(visited);
        } else {
            self.interior.extend(visited);
        }
        escaped
    }

    fn log_sizes(&self) {
        log::debug!(
            "voxel caches: {} exterior, {} interior",
            self.exterior.len(),
            self.interior.len()
        );
    }
}
