//! Curve context: binds a modulus, `b`, order and (for P-256) the
//! generator tables. Immutable after construction and shareable across
//! threads.

use crate::ec::error::CurveError;
use crate::ec::field::{FieldContext, FieldElement};
use crate::ec::kernel::AffineCoords;
use crate::ec::p256;
use crate::ec::protected::ProtectedTable;

/// Closed variant over the modulus class; selects which ladder `scalar()`
/// dispatches to. There is no open/extensible dispatch, per the source
/// design's guidance to avoid polymorphism over curves.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum CurveKind {
    /// Any short Weierstrass curve with `a = -3`.
    Generic,
    /// NIST P-256, unlocking the precomputed generator ladder.
    P256,
}

/// An immutable, shareable curve description: modulus, curve parameter
/// `b`, group order `n`, and (for P-256) the seed-scrambled generator
/// tables.
pub struct CurveContext {
    pub(crate) field: FieldContext,
    pub(crate) b: FieldElement,
    pub(crate) b3: FieldElement,
    pub(crate) order_bytes: Vec<u8>,
    pub(crate) kind: CurveKind,
    pub(crate) seed: u64,
    pub(crate) generator: Option<AffineCoords>,
    pub(crate) generator_tables: Option<Vec<ProtectedTable>>,
}

impl CurveContext {
    /// Binds a curve: `modulus`, `b` and `order` are big-endian and each
    /// exactly `len` bytes. `seed` scrambles the generator tables (if any)
    /// and is otherwise only consumed per-call by `scalar()`.
    pub fn new(modulus: &[u8], b: &[u8], order: &[u8], len: usize, seed: u64) -> Result<Self, CurveError> {
        if len == 0 {
            return Err(CurveError::NotEnoughData);
        }
        if modulus.len() != len || b.len() != len || order.len() != len {
            return Err(CurveError::NotEnoughData);
        }

        let field = FieldContext::new(modulus)?;
        let b_fe = field.from_bytes(b)?;
        let b3 = field.mul_small(&b_fe, 3);

        let kind = if p256::is_p256_modulus(modulus) {
            CurveKind::P256
        } else {
            CurveKind::Generic
        };

        let (generator, generator_tables) = if kind == CurveKind::P256 {
            let gx = field.from_bytes(&p256::P256_GX)?;
            let gy = field.from_bytes(&p256::P256_GY)?;
            let canonical = p256::generator_table(&field);
            let mut tables = Vec::with_capacity(p256::P256_N_TABLES);
            for i in 0..p256::P256_N_TABLES {
                let mut entries = Vec::with_capacity(p256::P256_POINTS_PER_TABLE * 2);
                for j in 0..p256::P256_POINTS_PER_TABLE {
                    let entry = &canonical[i * p256::P256_POINTS_PER_TABLE + j];
                    entries.push(entry.x.clone());
                    entries.push(entry.y.clone());
                }
                tables.push(ProtectedTable::scatter(
                    entries,
                    p256::P256_POINTS_PER_TABLE,
                    2,
                    seed,
                ));
            }
            (Some(AffineCoords { x: gx, y: gy }), Some(tables))
        } else {
            (None, None)
        };

        Ok(CurveContext {
            field,
            b: b_fe,
            b3,
            order_bytes: order.to_vec(),
            kind,
            seed,
            generator,
            generator_tables,
        })
    }

    pub(crate) fn field(&self) -> &FieldContext {
        &self.field
    }

    pub(crate) fn kind(&self) -> CurveKind {
        self.kind
    }

    pub(crate) fn order_bytes(&self) -> &[u8] {
        &self.order_bytes
    }
}

// Safety note (not `unsafe`, just documentation): `CurveContext` holds only
// owned, immutable data after construction, so the compiler derives
// `Send + Sync` automatically — matching the source design's "may be
// shared across threads".
