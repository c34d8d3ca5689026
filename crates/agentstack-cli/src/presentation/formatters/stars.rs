use agentstack_engine::Star;

pub const STAR_FULL: char = '★';
pub const STAR_HALF: char = '⯪';
pub const STAR_EMPTY: char = '☆';

pub fn star_glyph(star: Star) -> char {
    match star {
        Star::Full => STAR_FULL,
        Star::Half => STAR_HALF,
        Star::Empty => STAR_EMPTY,
    }
}

pub fn star_glyphs(stars: &[Star]) -> String {
    stars.iter().map(|s| star_glyph(*s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentstack_engine::insights::star_row;

    #[test]
    fn test_star_glyphs() {
        assert_eq!(star_glyphs(&star_row(4.5)), "★★★★⯪");
        assert_eq!(star_glyphs(&star_row(3.2)), "★★★☆☆");
    }
}
