//! `ThemeColors`: one complete role → color mapping.

use std::collections::HashSet;

use edit_color::Rgb;

use crate::attr::AttributeOverride;
use crate::role::{ROLE_COUNT, ROLES, Role, role_index};

/// Every role of one theme variant bound to a color, in table order, plus
/// the variant's attribute overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    colors: [Rgb; ROLE_COUNT],
    attributes: Vec<AttributeOverride>,
}

impl ThemeColors {
    /// Bind `colors[i]` to `ROLES[i]`.
    #[must_use]
    pub const fn new(colors: [Rgb; ROLE_COUNT], attributes: Vec<AttributeOverride>) -> Self {
        Self { colors, attributes }
    }

    /// Color bound to the role `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Rgb> {
        role_index(key).map(|i| self.colors[i])
    }

    /// Roles and colors in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static Role, Rgb)> + '_ {
        ROLES.iter().zip(self.colors.iter().copied())
    }

    #[must_use]
    pub const fn as_array(&self) -> &[Rgb; ROLE_COUNT] {
        &self.colors
    }

    #[must_use]
    pub fn attributes(&self) -> &[AttributeOverride] {
        &self.attributes
    }

    /// Number of different colors in the mapping. Equals [`ROLE_COUNT`]
    /// when collision avoidance fully succeeded.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.colors.iter().collect::<HashSet<_>>().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> ThemeColors {
        let mut colors = [Rgb::default(); ROLE_COUNT];
        for (i, c) in colors.iter_mut().enumerate() {
            *c = Rgb::new(u8::try_from(i).unwrap(), 0, 0);
        }
        ThemeColors::new(colors, Vec::new())
    }

    #[test]
    fn get_by_key_follows_table_order() {
        let colors = ramp();
        assert_eq!(colors.get("background"), Some(Rgb::new(0, 0, 0)));
        assert_eq!(colors.get("foreground"), Some(Rgb::new(1, 0, 0)));
        assert_eq!(colors.get("not_a_role"), None);
    }

    #[test]
    fn iter_pairs_roles_with_colors() {
        let colors = ramp();
        let (role, rgb) = colors.iter().last().unwrap();
        assert_eq!(role.key, "syntax_escape_bg");
        assert_eq!(usize::from(rgb.r), ROLE_COUNT - 1);
    }

    #[test]
    fn distinct_count_sees_duplicates() {
        assert_eq!(ramp().distinct_count(), ROLE_COUNT);
        let flat = ThemeColors::new([Rgb::BLACK; ROLE_COUNT], Vec::new());
        assert_eq!(flat.distinct_count(), 1);
    }
}
