/// Identifies one of the three fixed rods of a Hanoi board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RodId {
    Left,
    Middle,
    Right,
}

impl RodId {
    pub const ALL: [RodId; 3] = [RodId::Left, RodId::Middle, RodId::Right];

    pub(crate) const fn index(self) -> usize {
        match self {
            RodId::Left => 0,
            RodId::Middle => 1,
            RodId::Right => 2,
        }
    }

    /// The rod that is neither `self` nor `other`.
    /// Returns `self` when both are the same rod.
    pub const fn spare(self, other: RodId) -> RodId {
        match (self, other) {
            (RodId::Left, RodId::Middle) | (RodId::Middle, RodId::Left) => RodId::Right,
            (RodId::Left, RodId::Right) | (RodId::Right, RodId::Left) => RodId::Middle,
            (RodId::Middle, RodId::Right) | (RodId::Right, RodId::Middle) => RodId::Left,
            (same, _) => same,
        }
    }
}

/// A disk; its size alone decides what it may be stacked on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Disk {
    size: u8,
}

impl Disk {
    pub(crate) const fn new(size: u8) -> Self {
        debug_assert!(size > 0);
        Self { size }
    }

    pub const fn size(self) -> u8 {
        self.size
    }
}

/// An ordered stack of disks. The last element is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rod {
    disks: Vec<Disk>,
}

impl Rod {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disks from bottom to top
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// A disk may land on an empty rod or atop a strictly larger disk
    pub fn accepts(&self, disk: Disk) -> bool {
        self.top().is_none_or(|top| top.size > disk.size)
    }

    pub(crate) fn push(&mut self, disk: Disk) {
        debug_assert!(self.accepts(disk));
        self.disks.push(disk);
    }

    pub(crate) fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    /// Sizes strictly decrease from bottom to top
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[0].size > pair[1].size)
    }
}
