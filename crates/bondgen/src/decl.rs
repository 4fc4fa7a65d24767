//! Synthesizes the declarations of a single contract.

use crate::{
    abi::{ContractDescriptor, EventDescriptor, FunctionEntry, TypeDescriptor},
    error::Result,
    mapper::{Fidelity, map_tuple, map_type},
    overload,
    ts::{
        ContractDecls, ContractInterfaceDecl, FactoryDecl, InterfaceDecl, MemberKey, Method,
        TsParam, TsType,
    },
};

/// Name of the trailing overrides parameter on every call, transaction and deployment.
pub const OVERRIDES_PARAM: &str = "_overrides";

/// Builds the calls, transactions, contract and factory declarations of `contract`.
///
/// Fails on the first type that cannot be mapped.
pub fn declare_contract(contract: &ContractDescriptor) -> Result<ContractDecls> {
    let name = &contract.name;
    let interface = &contract.interface;
    let functions = &interface.functions;

    let calls = InterfaceDecl {
        name: format!("{name}Calls"),
        methods: functions
            .iter()
            .filter(|f| f.read_only)
            .map(|f| declare_function(f, functions))
            .collect::<Result<_>>()?,
    };

    let transactions = InterfaceDecl {
        name: format!("{name}Transactions"),
        methods: functions
            .iter()
            .filter(|f| !f.read_only)
            .map(|f| declare_function(f, functions))
            .collect::<Result<_>>()?,
    };

    let contract_decl = ContractInterfaceDecl {
        name: name.clone(),
        calls: calls.name.clone(),
        transactions: transactions.name.clone(),
        filters: interface.events.iter().map(declare_filter).collect::<Result<_>>()?,
        decoders: interface.events.iter().map(declare_decoder).collect::<Result<_>>()?,
    };

    let constructor = &interface.constructor;
    let mut constructor_params = declare_params(&constructor.inputs)?;
    constructor_params.push(overrides_param(overrides_type(constructor.payable)));
    let factory = FactoryDecl {
        name: format!("{name}Factory"),
        contract: name.clone(),
        constructor_args: TsType::LabeledTuple(constructor_params),
    };

    Ok(ContractDecls { calls, transactions, contract: contract_decl, factory })
}

/// Declares a call or transaction method. Read-only functions take call overrides, mutating ones
/// take (payable) transaction overrides.
fn declare_function(function: &FunctionEntry, siblings: &[FunctionEntry]) -> Result<Method> {
    let overrides = if function.read_only {
        TsType::named("CallOverrides")
    } else {
        overrides_type(function.payable)
    };

    let mut params = declare_params(&function.inputs)?;
    params.push(overrides_param(overrides));

    Ok(Method {
        key: overload::member_key(function, siblings),
        params,
        returns: TsType::promise(return_type(&function.outputs)?),
    })
}

/// Declares the `readonly filters` member of an event.
///
/// Only indexed inputs are topics, so only they accept a filter value; the rest accept `null`.
fn declare_filter(event: &EventDescriptor) -> Result<Method> {
    let params = event
        .inputs
        .iter()
        .enumerate()
        .map(|(i, input)| {
            let ty = if input.indexed {
                map_type(&input.param.ty, Fidelity::Flexible)?.or_null()
            } else {
                TsType::Null
            };
            Ok(TsParam::optional(param_name(&input.param, i), ty))
        })
        .collect::<Result<_>>()?;

    Ok(Method {
        key: MemberKey::Name(event.name.clone()),
        params,
        returns: TsType::named("EventFilter"),
    })
}

/// Declares the `extractEvents` overload that decodes logs of `event`.
fn declare_decoder(event: &EventDescriptor) -> Result<Method> {
    let fields = event.inputs.iter().map(|input| input.param.clone()).collect::<Vec<_>>();
    let record = map_tuple(&fields, Fidelity::Precise)?;

    Ok(Method {
        key: MemberKey::Name("extractEvents".to_string()),
        params: vec![
            TsParam::required("logs", TsType::array(TsType::named("Log"))),
            TsParam::required("name", TsType::Literal(event.name.clone())),
        ],
        returns: TsType::array(TsType::generic("TypedLogDescription", [record])),
    })
}

/// Maps inputs to parameters, naming unnamed ones `arg<i>`.
fn declare_params(inputs: &[TypeDescriptor]) -> Result<Vec<TsParam>> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| {
            Ok(TsParam::required(param_name(input, i), map_type(&input.ty, Fidelity::Flexible)?))
        })
        .collect()
}

fn return_type(outputs: &[TypeDescriptor]) -> Result<TsType> {
    match outputs {
        [] => Ok(TsType::Void),
        [output] => map_type(&output.ty, Fidelity::Precise),
        outputs => map_tuple(outputs, Fidelity::Precise),
    }
}

fn param_name(param: &TypeDescriptor, position: usize) -> String {
    if param.is_named() { param.name.clone() } else { format!("arg{position}") }
}

fn overrides_type(payable: bool) -> TsType {
    TsType::named(if payable { "PayableOverrides" } else { "Overrides" })
}

fn overrides_param(ty: TsType) -> TsParam {
    TsParam::optional(OVERRIDES_PARAM, ty)
}
