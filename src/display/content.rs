/// Rotation applied when a slot draws its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Center, // top slot upside-down, bottom slot upright
    Left,   // rotated 90° for viewers on one side
    Right,  // rotated -90° for viewers on the other side
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Center => Direction::Center,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Clockwise rotation in degrees for a slot in the top or bottom half.
    pub fn rotation_degrees(self, top: bool) -> f32 {
        match self {
            Direction::Center => {
                if top {
                    180.0
                } else {
                    0.0
                }
            }
            Direction::Left => 90.0,
            Direction::Right => -90.0,
        }
    }

    pub fn is_sideways(self) -> bool {
        self != Direction::Center
    }
}

/// The two things a slot can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Trump,
    Calls,
}

impl ContentKind {
    pub fn other(self) -> Self {
        match self {
            ContentKind::Trump => ContentKind::Calls,
            ContentKind::Calls => ContentKind::Trump,
        }
    }

    pub fn with(self, direction: Direction) -> DisplayContent {
        match self {
            ContentKind::Trump => DisplayContent::Trump(direction),
            ContentKind::Calls => DisplayContent::Calls(direction),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayContent {
    Trump(Direction),
    Calls(Direction),
    None,
}

impl DisplayContent {
    pub fn kind(self) -> Option<ContentKind> {
        match self {
            DisplayContent::Trump(_) => Some(ContentKind::Trump),
            DisplayContent::Calls(_) => Some(ContentKind::Calls),
            DisplayContent::None => None,
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            DisplayContent::Trump(direction) | DisplayContent::Calls(direction) => Some(direction),
            DisplayContent::None => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayContent::Trump(_) => "Trump card",
            DisplayContent::Calls(_) => "Calls",
            DisplayContent::None => "",
        }
    }

    pub fn is_none(self) -> bool {
        self == DisplayContent::None
    }
}
