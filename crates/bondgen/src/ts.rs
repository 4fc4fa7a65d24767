//! Structured representation of the generated TypeScript declarations.
//!
//! Nothing in here knows how the declarations are written out, see [`printer`](crate::printer).

/// A TypeScript type expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TsType {
    String,
    Boolean,
    Number,
    Void,
    Null,
    /// `BigNumber` from `@ethersproject/bignumber`.
    BigNumber,
    /// `BigNumberish` from `@ethersproject/bignumber`.
    BigNumberish,
    /// `BytesLike` from `@ethersproject/bytes`.
    BytesLike,
    /// `T[]`.
    Array(Box<TsType>),
    /// `[A, B]`.
    Tuple(Vec<TsType>),
    /// `[a: A, b?: B]`.
    LabeledTuple(Vec<TsParam>),
    /// `{ a: A; b: B }`.
    Record(Vec<(String, TsType)>),
    /// `A | B`.
    Union(Vec<TsType>),
    /// A string literal type, `"Transfer"`.
    Literal(String),
    /// A reference to a named type, with optional type arguments: `Promise<T>`.
    Reference(String, Vec<TsType>),
}

impl TsType {
    pub fn array(elem: Self) -> Self {
        Self::Array(Box::new(elem))
    }

    /// A non-generic named type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Reference(name.into(), Vec::new())
    }

    pub fn generic(name: impl Into<String>, args: impl IntoIterator<Item = Self>) -> Self {
        Self::Reference(name.into(), args.into_iter().collect())
    }

    pub fn promise(ty: Self) -> Self {
        Self::generic("Promise", [ty])
    }

    pub fn or_null(self) -> Self {
        Self::Union(vec![self, Self::Null])
    }
}

/// A function parameter or labeled tuple element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TsParam {
    pub name: String,
    pub ty: TsType,
    pub optional: bool,
}

impl TsParam {
    pub fn required(name: impl Into<String>, ty: TsType) -> Self {
        Self { name: name.into(), ty, optional: false }
    }

    pub fn optional(name: impl Into<String>, ty: TsType) -> Self {
        Self { name: name.into(), ty, optional: true }
    }
}

/// How an interface member is keyed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemberKey {
    /// A plain identifier, for names that are unique within the contract.
    Name(String),
    /// A quoted full signature, for overloaded names: `["transfer(address,uint256)"]`.
    Signature(String),
}

/// A method signature inside an interface body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Method {
    pub key: MemberKey,
    pub params: Vec<TsParam>,
    pub returns: TsType,
}

/// A plain `interface Name { ... }` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub name: String,
    pub methods: Vec<Method>,
}

/// The exported contract interface, extending `TypedContract<Calls, Transactions>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractInterfaceDecl {
    pub name: String,
    pub calls: String,
    pub transactions: String,
    /// Members of the `readonly filters` object, one per event.
    pub filters: Vec<Method>,
    /// `extractEvents` overloads, one per event.
    pub decoders: Vec<Method>,
}

/// `export type NameFactory = TypedContractFactory<Name, [params]>;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactoryDecl {
    pub name: String,
    pub contract: String,
    /// The deploy arguments as a [`TsType::LabeledTuple`], overrides last.
    pub constructor_args: TsType,
}

/// Everything generated for one contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractDecls {
    pub calls: InterfaceDecl,
    pub transactions: InterfaceDecl,
    pub contract: ContractInterfaceDecl,
    pub factory: FactoryDecl,
}

/// The whole generated module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    /// Where `TypedContract`, `TypedContractFactory` and `TypedLogDescription` are imported from.
    pub typing_import: String,
    pub contracts: Vec<ContractDecls>,
}
