// crates/hd_configure/src/elements.rs

//! 周期表
//!
//! 辐射模型按小写元素符号和原子序数引用元素。元素可由原子序数、
//! 符号（不区分大小写）或英文名称（不区分大小写）指定。

use hd_config::{ConfigError, ConfigResult, ElementRef};

/// 化学元素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    /// 原子序数
    pub number: u32,
    /// 元素符号
    pub symbol: &'static str,
    /// 英文名称
    pub name: &'static str,
}

impl Element {
    /// 小写符号（HYDRAD 配置文件中的写法）
    pub fn lowercase_symbol(&self) -> String {
        self.symbol.to_ascii_lowercase()
    }
}

/// (符号, 名称)，下标 + 1 为原子序数
const TABLE: [(&str, &str); 118] = [
    ("H", "hydrogen"),
    ("He", "helium"),
    ("Li", "lithium"),
    ("Be", "beryllium"),
    ("B", "boron"),
    ("C", "carbon"),
    ("N", "nitrogen"),
    ("O", "oxygen"),
    ("F", "fluorine"),
    ("Ne", "neon"),
    ("Na", "sodium"),
    ("Mg", "magnesium"),
    ("Al", "aluminium"),
    ("Si", "silicon"),
    ("P", "phosphorus"),
    ("S", "sulfur"),
    ("Cl", "chlorine"),
    ("Ar", "argon"),
    ("K", "potassium"),
    ("Ca", "calcium"),
    ("Sc", "scandium"),
    ("Ti", "titanium"),
    ("V", "vanadium"),
    ("Cr", "chromium"),
    ("Mn", "manganese"),
    ("Fe", "iron"),
    ("Co", "cobalt"),
    ("Ni", "nickel"),
    ("Cu", "copper"),
    ("Zn", "zinc"),
    ("Ga", "gallium"),
    ("Ge", "germanium"),
    ("As", "arsenic"),
    ("Se", "selenium"),
    ("Br", "bromine"),
    ("Kr", "krypton"),
    ("Rb", "rubidium"),
    ("Sr", "strontium"),
    ("Y", "yttrium"),
    ("Zr", "zirconium"),
    ("Nb", "niobium"),
    ("Mo", "molybdenum"),
    ("Tc", "technetium"),
    ("Ru", "ruthenium"),
    ("Rh", "rhodium"),
    ("Pd", "palladium"),
    ("Ag", "silver"),
    ("Cd", "cadmium"),
    ("In", "indium"),
    ("Sn", "tin"),
    ("Sb", "antimony"),
    ("Te", "tellurium"),
    ("I", "iodine"),
    ("Xe", "xenon"),
    ("Cs", "caesium"),
    ("Ba", "barium"),
    ("La", "lanthanum"),
    ("Ce", "cerium"),
    ("Pr", "praseodymium"),
    ("Nd", "neodymium"),
    ("Pm", "promethium"),
    ("Sm", "samarium"),
    ("Eu", "europium"),
    ("Gd", "gadolinium"),
    ("Tb", "terbium"),
    ("Dy", "dysprosium"),
    ("Ho", "holmium"),
    ("Er", "erbium"),
    ("Tm", "thulium"),
    ("Yb", "ytterbium"),
    ("Lu", "lutetium"),
    ("Hf", "hafnium"),
    ("Ta", "tantalum"),
    ("W", "tungsten"),
    ("Re", "rhenium"),
    ("Os", "osmium"),
    ("Ir", "iridium"),
    ("Pt", "platinum"),
    ("Au", "gold"),
    ("Hg", "mercury"),
    ("Tl", "thallium"),
    ("Pb", "lead"),
    ("Bi", "bismuth"),
    ("Po", "polonium"),
    ("At", "astatine"),
    ("Rn", "radon"),
    ("Fr", "francium"),
    ("Ra", "radium"),
    ("Ac", "actinium"),
    ("Th", "thorium"),
    ("Pa", "protactinium"),
    ("U", "uranium"),
    ("Np", "neptunium"),
    ("Pu", "plutonium"),
    ("Am", "americium"),
    ("Cm", "curium"),
    ("Bk", "berkelium"),
    ("Cf", "californium"),
    ("Es", "einsteinium"),
    ("Fm", "fermium"),
    ("Md", "mendelevium"),
    ("No", "nobelium"),
    ("Lr", "lawrencium"),
    ("Rf", "rutherfordium"),
    ("Db", "dubnium"),
    ("Sg", "seaborgium"),
    ("Bh", "bohrium"),
    ("Hs", "hassium"),
    ("Mt", "meitnerium"),
    ("Ds", "darmstadtium"),
    ("Rg", "roentgenium"),
    ("Cn", "copernicium"),
    ("Nh", "nihonium"),
    ("Fl", "flerovium"),
    ("Mc", "moscovium"),
    ("Lv", "livermorium"),
    ("Ts", "tennessine"),
    ("Og", "oganesson"),
];

/// 美式拼写等别名
const NAME_ALIASES: &[(&str, u32)] = &[("aluminum", 13), ("sulphur", 16), ("cesium", 55)];

/// 平衡电离元素列表中总是包含的元素（氢、氦）
pub const EQUILIBRIUM_BASE: [u32; 2] = [1, 2];

/// 按原子序数查找
pub fn by_number(number: u32) -> Option<Element> {
    let index = usize::try_from(number).ok()?.checked_sub(1)?;
    TABLE.get(index).map(|&(symbol, name)| Element {
        number,
        symbol,
        name,
    })
}

/// 解析元素引用
pub fn lookup(element: &ElementRef) -> ConfigResult<Element> {
    let found = match element {
        ElementRef::Number(n) => by_number(*n),
        ElementRef::Name(text) => lookup_name(text.trim()),
    };
    found.ok_or_else(|| ConfigError::InvalidElementSymbol(element.to_string()))
}

fn lookup_name(text: &str) -> Option<Element> {
    if let Ok(n) = text.parse::<u32>() {
        return by_number(n);
    }
    let position = TABLE.iter().position(|(symbol, name)| {
        symbol.eq_ignore_ascii_case(text) || name.eq_ignore_ascii_case(text)
    });
    if let Some(index) = position {
        return by_number(index as u32 + 1);
    }
    NAME_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(text))
        .and_then(|&(_, n)| by_number(n))
}

/// 解析元素列表并按符号去重，保持首次出现的顺序
///
/// `base` 中的原子序数排在最前面。
pub fn resolve_unique<'a>(
    base: &[u32],
    elements: impl IntoIterator<Item = &'a ElementRef>,
) -> ConfigResult<Vec<Element>> {
    let mut resolved: Vec<Element> = Vec::new();
    let base = base
        .iter()
        .map(|&n| lookup(&ElementRef::Number(n)));
    let configured = elements.into_iter().map(lookup);
    for element in base.chain(configured) {
        let element = element?;
        if !resolved.iter().any(|e| e.symbol == element.symbol) {
            resolved.push(element);
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_forms() {
        assert_eq!(lookup(&ElementRef::from("iron")).unwrap().number, 26);
        assert_eq!(lookup(&ElementRef::from("Fe")).unwrap().number, 26);
        assert_eq!(lookup(&ElementRef::from("fe")).unwrap().number, 26);
        assert_eq!(lookup(&ElementRef::from("He")).unwrap().symbol, "He");
        assert_eq!(lookup(&ElementRef::from(1)).unwrap().symbol, "H");
        assert_eq!(lookup(&ElementRef::from("26")).unwrap().symbol, "Fe");
        assert_eq!(lookup(&ElementRef::from("aluminum")).unwrap().number, 13);
        assert_eq!(lookup(&ElementRef::from(118)).unwrap().symbol, "Og");
    }

    #[test]
    fn test_table_order() {
        for (i, (symbol, _)) in TABLE.iter().enumerate() {
            let element = by_number(i as u32 + 1).unwrap();
            assert_eq!(element.symbol, *symbol);
        }
        assert_eq!(by_number(8).unwrap().name, "oxygen");
        assert_eq!(by_number(92).unwrap().symbol, "U");
    }

    #[test]
    fn test_invalid_elements() {
        for bad in [ElementRef::from("unobtainium"), ElementRef::from(0), ElementRef::from(119)] {
            assert!(matches!(
                lookup(&bad),
                Err(ConfigError::InvalidElementSymbol(_))
            ));
        }
    }

    #[test]
    fn test_resolve_unique_with_base() {
        let configured = vec![
            ElementRef::from("iron"),
            ElementRef::from("He"),
            ElementRef::from(1),
        ];
        let resolved = resolve_unique(&EQUILIBRIUM_BASE, &configured).unwrap();
        let symbols: Vec<_> = resolved.iter().map(|e| e.lowercase_symbol()).collect();
        assert_eq!(symbols, vec!["h", "he", "fe"]);
    }

    #[test]
    fn test_resolve_unique_without_base() {
        let configured = vec![
            ElementRef::from("O"),
            ElementRef::from("oxygen"),
            ElementRef::from("Fe"),
        ];
        let resolved = resolve_unique(&[], &configured).unwrap();
        let numbers: Vec<_> = resolved.iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![8, 26]);
    }
}
