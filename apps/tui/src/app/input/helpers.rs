pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Moves a table cursor by `delta` rows without wrapping.
pub fn step_within(index: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    index.saturating_add_signed(delta).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_cycles_through_ends() {
        assert_eq!(wrap_increment(2, 3), 0);
        assert_eq!(wrap_decrement(0, 3), 2);
        assert_eq!(wrap_increment(0, 0), 0);
    }

    #[test]
    fn stepping_stops_at_ends() {
        assert_eq!(step_within(0, 10, -5), 0);
        assert_eq!(step_within(7, 10, 5), 9);
        assert_eq!(step_within(3, 10, 1), 4);
        assert_eq!(step_within(3, 0, 1), 0);
    }
}
