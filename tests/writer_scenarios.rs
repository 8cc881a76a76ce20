//! Integration scenarios for full table-assembly runs.
//!
//! These tests drive a complete emission run: build a module the way the
//! front-end would, index it, register references while "emitting bodies",
//! then check the finished tables against the layout the physical writer
//! expects.

use cilemit::prelude::*;
use uguid::guid;

/// Encodes each handle to a blob derived from its value only, so handles
/// with equal values are structurally equal signatures.
struct StubEncoder;

impl SignatureEncoder for StubEncoder {
    fn member_signature(&self, _: &Module, member: &MemberRef) -> Result<Vec<u8>> {
        let v = member.signature.0;
        Ok(vec![0x20, (v >> 8) as u8, v as u8])
    }
    fn method_instantiation(&self, _: &Module, spec: &MethodSpec) -> Result<Vec<u8>> {
        let v = spec.instantiation.0;
        Ok(vec![0x0A, (v >> 8) as u8, v as u8])
    }
    fn type_signature(&self, _: &Module, spec: &TypeSpec) -> Result<Vec<u8>> {
        let v = spec.signature.0;
        Ok(vec![0x15, (v >> 8) as u8, v as u8])
    }
}

fn new_module() -> Module {
    Module::new(
        "scenario.dll",
        guid!("0f0e0d0c-0b0a-0908-0706-050403020100"),
    )
}

fn mscorlib() -> AssemblyRef {
    AssemblyRef::new("mscorlib", (4, 0, 0, 0))
}

/// Two types, A (2 fields, 1 method) and B (1 method, 1 event), registered
/// in order: checks every table row and ownership range the layout implies.
#[test]
fn two_type_module_layout() {
    let mut module = new_module();

    let a = module.define_type(TypeDef::new("N", "A", TypeAttributes::PUBLIC));
    let f1 = module.add_field(
        a,
        FieldDef {
            name: "f1".to_string(),
            flags: FieldAttributes::PRIVATE,
        },
    );
    let f2 = module.add_field(
        a,
        FieldDef {
            name: "f2".to_string(),
            flags: FieldAttributes::PRIVATE,
        },
    );
    let a_m1 = module.add_method(a, MethodDef::new("M1", MethodAttributes::PUBLIC));

    let b = module.define_type(TypeDef::new("N", "B", TypeAttributes::PUBLIC));
    let b_m1 = module.add_method(b, MethodDef::new("M1", MethodAttributes::PUBLIC));
    let b_e1 = module.add_event(
        b,
        EventDef {
            name: "E1".to_string(),
            flags: EventAttributes::empty(),
        },
    );

    let encoder = StubEncoder;
    let mut writer = TableWriter::new(&module, &encoder);
    writer.index_module().unwrap();

    // Type table: A -> 1, B -> 2.
    assert_eq!(writer.type_defs(), &[a, b]);
    assert_eq!(writer.type_def_row(a).unwrap(), RowId(1));
    assert_eq!(writer.type_def_row(b).unwrap(), RowId(2));

    // Field table: A.f1 -> 1, A.f2 -> 2.
    assert_eq!(writer.field_defs(), &[f1, f2]);
    assert_eq!(writer.field_def_row(f1).unwrap(), RowId(1));
    assert_eq!(writer.field_def_row(f2).unwrap(), RowId(2));

    // A owns field rows 1-2, B owns none.
    let a_fields = writer.owned_field_range(a).unwrap();
    assert_eq!(a_fields, OwnershipRange::new(RowId(1), RowId(3)));
    assert_eq!(a_fields.rows().collect::<Vec<_>>(), vec![RowId(1), RowId(2)]);
    let b_fields = writer.owned_field_range(b).unwrap();
    assert_eq!(b_fields, OwnershipRange::new(RowId(3), RowId(3)));
    assert!(b_fields.is_empty());

    // Method table: A.M1 -> 1, B.M1 -> 2.
    assert_eq!(writer.method_defs(), &[a_m1, b_m1]);
    assert_eq!(writer.owned_method_range(a).unwrap().len(), 1);
    assert_eq!(writer.owned_method_range(b).unwrap().len(), 1);

    // Event map: exactly one row, (B -> 2, first event row).
    let event_map = writer.event_map_rows().unwrap();
    assert_eq!(event_map.len(), 1);
    assert_eq!(event_map[0].parent, RowId(2));
    assert_eq!(event_map[0].event_list, writer.event_def_row(b_e1).unwrap());
}

/// The same type-reference value registered three times produces one row
/// and three identical returns.
#[test]
fn repeated_type_ref_is_one_row() {
    let module = new_module();
    let encoder = StubEncoder;
    let mut writer = TableWriter::new(&module, &encoder);

    let console = TypeRef::new(ResolutionScope::Assembly(mscorlib()), "System", "Console");
    let r1 = writer.get_or_add_type_ref(console.clone());
    let r2 = writer.get_or_add_type_ref(console.clone());
    let r3 = writer.get_or_add_type_ref(console.clone());

    assert_eq!(r1, RowId(1));
    assert_eq!(r1, r2);
    assert_eq!(r2, r3);
    assert_eq!(writer.type_refs().len(), 1);
    assert_eq!(writer.try_type_ref_row(&console), Some(r1));
}

/// Two independently built member-reference objects pointing at the same
/// external method produce one row, not two.
#[test]
fn structurally_equal_member_refs_collapse() {
    let mut module = new_module();

    let write_line = || MemberRef {
        parent: MemberRefParent::TypeRef(TypeRef::new(
            ResolutionScope::Assembly(mscorlib()),
            "System",
            "Console",
        )),
        name: "WriteLine".to_string(),
        signature: SignatureHandle(42),
    };
    let first = module.add_member_ref(write_line());
    let second = module.add_member_ref(write_line());
    assert_ne!(first, second);

    let encoder = StubEncoder;
    let mut writer = TableWriter::new(&module, &encoder);

    let row_first = writer.get_or_add_member_ref(first).unwrap();
    let row_second = writer.get_or_add_member_ref(second).unwrap();
    assert_eq!(row_first, row_second);
    assert_eq!(writer.member_refs().len(), 1);

    // Identity fast path after aliasing.
    assert_eq!(writer.get_or_add_member_ref(second).unwrap(), row_first);
}

/// Member refs with equal names but different signatures stay distinct.
#[test]
fn different_signatures_stay_distinct() {
    let mut module = new_module();
    let parent = MemberRefParent::TypeRef(TypeRef::new(
        ResolutionScope::Assembly(mscorlib()),
        "System",
        "Console",
    ));
    let by_string = module.add_member_ref(MemberRef {
        parent: parent.clone(),
        name: "WriteLine".to_string(),
        signature: SignatureHandle(1),
    });
    let by_int = module.add_member_ref(MemberRef {
        parent,
        name: "WriteLine".to_string(),
        signature: SignatureHandle(2),
    });

    let encoder = StubEncoder;
    let mut writer = TableWriter::new(&module, &encoder);
    let row_string = writer.get_or_add_member_ref(by_string).unwrap();
    let row_int = writer.get_or_add_member_ref(by_int).unwrap();
    assert_ne!(row_string, row_int);
    assert_eq!(writer.member_refs().len(), 2);
}

/// Structurally equal type specs collapse, and a member ref through a spec
/// registers the spec as a side effect.
#[test]
fn type_specs_collapse_through_member_refs() {
    let mut module = new_module();
    let spec_a = module.add_type_spec(TypeSpec {
        signature: SignatureHandle(7),
    });
    let spec_b = module.add_type_spec(TypeSpec {
        signature: SignatureHandle(7),
    });
    let member = module.add_member_ref(MemberRef {
        parent: MemberRefParent::TypeSpec(spec_b),
        name: "Add".to_string(),
        signature: SignatureHandle(9),
    });

    let encoder = StubEncoder;
    let mut writer = TableWriter::new(&module, &encoder);

    let row_a = writer.get_or_add_type_spec(spec_a).unwrap();
    writer.get_or_add_member_ref(member).unwrap();

    // spec_b aliased onto spec_a's row while building the member-ref key.
    assert_eq!(writer.get_or_add_type_spec(spec_b).unwrap(), row_a);
    assert_eq!(writer.type_specs().len(), 1);
}

/// Generic method instantiations dedup on (method, instantiation) pairs.
#[test]
fn method_specs_dedup_on_method_and_instantiation() {
    let mut module = new_module();
    let ty = module.define_type(TypeDef::new("N", "Util", TypeAttributes::PUBLIC));
    let map = module.add_method(ty, MethodDef::new("Map", MethodAttributes::PUBLIC));

    let of_int_1 = module.add_method_spec(MethodSpec {
        method: GenericMethod::Def(map),
        instantiation: SignatureHandle(100),
    });
    let of_int_2 = module.add_method_spec(MethodSpec {
        method: GenericMethod::Def(map),
        instantiation: SignatureHandle(100),
    });
    let of_string = module.add_method_spec(MethodSpec {
        method: GenericMethod::Def(map),
        instantiation: SignatureHandle(200),
    });

    let encoder = StubEncoder;
    let mut writer = TableWriter::new(&module, &encoder);
    writer.index_module().unwrap();

    let row_1 = writer.get_or_add_method_spec(of_int_1).unwrap();
    let row_2 = writer.get_or_add_method_spec(of_int_2).unwrap();
    let row_3 = writer.get_or_add_method_spec(of_string).unwrap();
    assert_eq!(row_1, row_2);
    assert_ne!(row_1, row_3);
    assert_eq!(writer.method_specs().len(), 2);
}

/// Property map coverage: parents are exactly the types with properties,
/// and forward-scanning each map row recovers that type's properties in
/// declaration order.
#[test]
fn property_map_covers_exactly_owning_types() {
    let mut module = new_module();
    let mut expected: Vec<(TypeDefId, Vec<PropertyId>)> = Vec::new();

    for (name, count) in [("A", 2usize), ("B", 0), ("C", 1), ("D", 3)] {
        let ty = module.define_type(TypeDef::new("N", name, TypeAttributes::PUBLIC));
        let mut props = Vec::new();
        for i in 0..count {
            props.push(module.add_property(
                ty,
                PropertyDef {
                    name: format!("P{i}"),
                    flags: PropertyAttributes::empty(),
                },
            ));
        }
        if !props.is_empty() {
            expected.push((ty, props));
        }
    }

    let encoder = StubEncoder;
    let mut writer = TableWriter::new(&module, &encoder);
    writer.index_module().unwrap();

    let map = writer.property_map_rows().unwrap();
    assert_eq!(map.len(), expected.len());

    for (i, row) in map.iter().enumerate() {
        let (ty, props) = &expected[i];
        assert_eq!(row.parent, writer.type_def_row(*ty).unwrap());

        // Scan forward to the next map row (or table end).
        let end = map
            .get(i + 1)
            .map(|next| next.property_list)
            .unwrap_or(RowId(writer.property_defs().len() as u32 + 1));
        let owned: Vec<PropertyId> = (row.property_list.value()..end.value())
            .map(|rid| writer.property_defs()[rid as usize - 1])
            .collect();
        assert_eq!(&owned, props);
    }
}

/// Explicit overrides resolve to MethodImpl rows in traversal order, with
/// member-ref declarations registered on demand.
#[test]
fn method_impl_rows_resolve_bodies_and_declarations() {
    let mut module = new_module();
    let disposable = module.add_member_ref(MemberRef {
        parent: MemberRefParent::TypeRef(TypeRef::new(
            ResolutionScope::Assembly(mscorlib()),
            "System",
            "IDisposable.Dispose",
        )),
        name: "Dispose".to_string(),
        signature: SignatureHandle(3),
    });

    let ty = module.define_type(TypeDef::new("N", "Res", TypeAttributes::PUBLIC));
    let dispose = module.add_method(ty, MethodDef::new("Dispose", MethodAttributes::PRIVATE));
    module.add_override(
        ty,
        MethodImplOverride {
            body: MethodHandle::Def(dispose),
            declaration: MethodHandle::Ref(disposable),
        },
    );

    let encoder = StubEncoder;
    let mut writer = TableWriter::new(&module, &encoder);
    writer.index_module().unwrap();

    let rows = writer.method_impl_rows().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].class, writer.type_def_row(ty).unwrap());
    assert_eq!(
        rows[0].method_body,
        MethodDefOrRef::Def(writer.method_def_row(dispose).unwrap())
    );
    match rows[0].method_declaration {
        MethodDefOrRef::Ref(rid) => {
            assert_eq!(writer.get_or_add_member_ref(disposable).unwrap(), rid);
        }
        MethodDefOrRef::Def(_) => panic!("declaration should be a member ref"),
    }
}

/// Simple reference tables dedup by value.
#[test]
fn simple_reference_tables_dedup_by_value() {
    let module = new_module();
    let encoder = StubEncoder;
    let mut writer = TableWriter::new(&module, &encoder);

    let first = writer.get_or_add_assembly_ref(mscorlib());
    let again = writer.get_or_add_assembly_ref(mscorlib());
    let other = writer.get_or_add_assembly_ref(AssemblyRef::new("System.Core", (4, 0, 0, 0)));
    assert_eq!(first, again);
    assert_ne!(first, other);
    assert_eq!(writer.assembly_refs().len(), 2);

    let k32 = writer.get_or_add_module_ref("kernel32.dll".to_string());
    assert_eq!(
        writer.get_or_add_module_ref("kernel32.dll".to_string()),
        k32
    );
    assert_eq!(writer.module_refs().len(), 1);

    let locals = writer.get_or_add_standalone_signature(vec![0x07, 0x01, 0x08]);
    assert_eq!(
        writer.get_or_add_standalone_signature(vec![0x07, 0x01, 0x08]),
        locals
    );
    assert_eq!(writer.standalone_signatures().len(), 1);
}

/// Two identical runs produce identical tables: order depends only on the
/// input, never on hash iteration.
#[test]
fn identical_input_yields_identical_tables() {
    let build = || {
        let mut module = new_module();
        for name in ["A", "B", "C"] {
            let ty = module.define_type(TypeDef::new("N", name, TypeAttributes::PUBLIC));
            module.add_method(ty, MethodDef::new("M", MethodAttributes::PUBLIC));
            module.add_event(
                ty,
                EventDef {
                    name: "E".to_string(),
                    flags: EventAttributes::empty(),
                },
            );
        }
        module
    };

    let (module_1, module_2) = (build(), build());
    let encoder = StubEncoder;
    let mut writer_1 = TableWriter::new(&module_1, &encoder);
    let mut writer_2 = TableWriter::new(&module_2, &encoder);
    writer_1.index_module().unwrap();
    writer_2.index_module().unwrap();

    assert_eq!(writer_1.type_defs(), writer_2.type_defs());
    assert_eq!(writer_1.method_defs(), writer_2.method_defs());
    assert_eq!(writer_1.event_defs(), writer_2.event_defs());
    assert_eq!(
        writer_1.event_map_rows().unwrap(),
        writer_2.event_map_rows().unwrap()
    );
}

/// A duplicate registration aborts the run with the offending table named.
#[test]
fn aliased_definition_aborts_the_run() {
    let mut module = new_module();
    let outer = module.define_type(TypeDef::new("N", "Outer", TypeAttributes::PUBLIC));
    // Front-end defect: the same type listed both nested and top-level.
    let inner = module.define_type(TypeDef::nested(
        "Inner",
        TypeAttributes::NESTED_PUBLIC,
        outer,
    ));
    let mut alias = TypeDef::new("N", "Alias", TypeAttributes::PUBLIC);
    alias.nested_types.push(inner);
    module.define_type(alias);

    let encoder = StubEncoder;
    let mut writer = TableWriter::new(&module, &encoder);
    let err = writer.index_module().unwrap_err();
    assert!(matches!(
        err,
        Error::DuplicateDefinition {
            table: TableId::TypeDef
        }
    ));
}
