//! Renders the [`ts`](crate::ts) declarations to TypeScript source.
//!
//! Formatting decisions live here and nowhere else. The output only depends on the declarations,
//! so rendering the same module twice yields identical text.

use crate::ts::{
    ContractDecls, ContractInterfaceDecl, FactoryDecl, InterfaceDecl, MemberKey, Method, Module,
    TsParam, TsType,
};
use itertools::Itertools;
use std::fmt::{self, Display, Formatter, Write as _};

/// First line of every generated module.
pub const GENERATED_HEADER: &str = "// Automatically @generated by `bondgen`. Do not edit.";

/// Names imported from ethers, by module.
const ETHERS_IMPORTS: [(&str, &str); 4] = [
    ("Log", "@ethersproject/abstract-provider"),
    ("BigNumber, BigNumberish", "@ethersproject/bignumber"),
    ("BytesLike", "@ethersproject/bytes"),
    ("Overrides, CallOverrides, PayableOverrides, EventFilter", "@ethersproject/contracts"),
];

/// Names imported from the configured typing module.
const TYPING_IMPORTS: &str = "TypedContract, TypedContractFactory, TypedLogDescription";

/// A double-quoted TypeScript string literal.
struct Quoted<'a>(&'a str);

impl Display for Quoted<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c if c.is_control() => write!(f, "\\u{:04x}", u32::from(c))?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}

impl Display for TsType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Boolean => f.write_str("boolean"),
            Self::Number => f.write_str("number"),
            Self::Void => f.write_str("void"),
            Self::Null => f.write_str("null"),
            Self::BigNumber => f.write_str("BigNumber"),
            Self::BigNumberish => f.write_str("BigNumberish"),
            Self::BytesLike => f.write_str("BytesLike"),
            Self::Array(elem) => write!(f, "{elem}[]"),
            Self::Tuple(elems) => write!(f, "[{}]", elems.iter().format(", ")),
            Self::LabeledTuple(elems) => write!(f, "[{}]", elems.iter().format(", ")),
            Self::Record(fields) => write!(
                f,
                "{{ {} }}",
                fields.iter().format_with("; ", |(name, ty), f| f(&format_args!("{name}: {ty}")))
            ),
            Self::Union(variants) => write!(f, "{}", variants.iter().format(" | ")),
            Self::Literal(value) => write!(f, "{}", Quoted(value)),
            Self::Reference(name, args) if args.is_empty() => f.write_str(name),
            Self::Reference(name, args) => write!(f, "{name}<{}>", args.iter().format(", ")),
        }
    }
}

impl Display for TsParam {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let optional = if self.optional { "?" } else { "" };
        write!(f, "{}{optional}: {}", self.name, self.ty)
    }
}

impl Display for MemberKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Signature(signature) => write!(f, "[{}]", Quoted(signature)),
        }
    }
}

/// A method without indentation or trailing semicolon: `key(params): returns`.
impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.key, self.params.iter().format(", "), self.returns)
    }
}

impl Display for InterfaceDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "interface {} {{", self.name)?;
        for method in &self.methods {
            writeln!(f, "  {method};")?;
        }
        f.write_str("}")
    }
}

impl Display for ContractInterfaceDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "export interface {}", self.name)?;
        writeln!(f, "  extends TypedContract<{}, {}> {{", self.calls, self.transactions)?;
        writeln!(f, "  readonly filters: {{")?;
        for filter in &self.filters {
            writeln!(f, "    {filter};")?;
        }
        writeln!(f, "  }};")?;
        for decoder in &self.decoders {
            writeln!(f, "  {decoder};")?;
        }
        f.write_str("}")
    }
}

impl Display for FactoryDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "export type {} = TypedContractFactory<{}, {}>;",
            self.name, self.contract, self.constructor_args
        )
    }
}

/// The four declarations of a contract, separated by blank lines.
impl Display for ContractDecls {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n\n{}\n\n{}\n\n{}",
            self.calls, self.transactions, self.contract, self.factory
        )
    }
}

impl Display for Module {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{GENERATED_HEADER}")?;
        writeln!(f)?;
        for (names, module) in ETHERS_IMPORTS {
            writeln!(f, "import {{ {names} }} from {};", Quoted(module))?;
        }
        writeln!(f)?;
        writeln!(f, "import {{ {TYPING_IMPORTS} }} from {};", Quoted(&self.typing_import))?;
        writeln!(f)?;
        writeln!(f, "{}", self.contracts.iter().format("\n\n"))
    }
}

/// Renders the module to a string.
pub fn render(module: &Module) -> String {
    module.to_string()
}
