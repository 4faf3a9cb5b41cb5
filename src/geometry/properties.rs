use std::collections::BTreeMap;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};

use super::throat_area;

/// A per-throat field, one entry per throat.
#[derive(Debug, Clone, PartialEq)]
pub enum ThroatField {
    /// One scalar per throat (e.g. diameter).
    Scalar(Vec<f64>),
    /// One vector per throat (e.g. normal).
    Vector(Vec<Vector3>),
    /// One vertex loop per throat (e.g. offset polygon vertices).
    Polygon(Vec<Vec<Point3>>),
}

impl ThroatField {
    /// Number of throats covered by the field.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(v) => v.len(),
            Self::Vector(v) => v.len(),
            Self::Polygon(v) => v.len(),
        }
    }

    /// Returns `true` if the field covers no throats.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Named per-throat fields read by the throat geometry models.
///
/// Every field holds exactly one entry per throat.
#[derive(Debug, Clone, Default)]
pub struct ThroatProperties {
    num_throats: usize,
    fields: BTreeMap<String, ThroatField>,
}

impl ThroatProperties {
    /// Creates an empty store for `num_throats` throats.
    #[must_use]
    pub fn new(num_throats: usize) -> Self {
        Self {
            num_throats,
            fields: BTreeMap::new(),
        }
    }

    /// Number of throats each field must cover.
    #[must_use]
    pub fn num_throats(&self) -> usize {
        self.num_throats
    }

    /// Stores a field under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ShapeMismatch`] if the field does not have one
    /// entry per throat.
    pub fn insert(&mut self, key: impl Into<String>, field: ThroatField) -> Result<()> {
        let key = key.into();
        if field.len() != self.num_throats {
            return Err(GeometryError::ShapeMismatch {
                key,
                expected: self.num_throats,
                actual: field.len(),
            }
            .into());
        }
        self.fields.insert(key, field);
        Ok(())
    }

    /// Stores a scalar field.
    ///
    /// # Errors
    ///
    /// See [`ThroatProperties::insert`].
    pub fn insert_scalar(&mut self, key: impl Into<String>, values: Vec<f64>) -> Result<()> {
        self.insert(key, ThroatField::Scalar(values))
    }

    /// Stores a vector field.
    ///
    /// # Errors
    ///
    /// See [`ThroatProperties::insert`].
    pub fn insert_vectors(&mut self, key: impl Into<String>, values: Vec<Vector3>) -> Result<()> {
        self.insert(key, ThroatField::Vector(values))
    }

    /// Stores a polygon field.
    ///
    /// # Errors
    ///
    /// See [`ThroatProperties::insert`].
    pub fn insert_polygons(
        &mut self,
        key: impl Into<String>,
        values: Vec<Vec<Point3>>,
    ) -> Result<()> {
        self.insert(key, ThroatField::Polygon(values))
    }

    /// Returns the field stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::PropertyNotFound`] if no such field exists.
    pub fn get(&self, key: &str) -> Result<&ThroatField> {
        self.fields
            .get(key)
            .ok_or_else(|| GeometryError::PropertyNotFound(key.into()).into())
    }

    /// Returns a scalar field.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is missing or not scalar.
    pub fn scalar(&self, key: &str) -> Result<&[f64]> {
        match self.get(key)? {
            ThroatField::Scalar(v) => Ok(v),
            _ => Err(kind_error(key, "scalar")),
        }
    }

    /// Returns a vector field.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is missing or not a vector field.
    pub fn vectors(&self, key: &str) -> Result<&[Vector3]> {
        match self.get(key)? {
            ThroatField::Vector(v) => Ok(v),
            _ => Err(kind_error(key, "vector")),
        }
    }

    /// Returns a polygon field.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is missing or not a polygon field.
    pub fn polygons(&self, key: &str) -> Result<&[Vec<Point3>]> {
        match self.get(key)? {
            ThroatField::Polygon(v) => Ok(v),
            _ => Err(kind_error(key, "polygon")),
        }
    }

    /// Names of all stored fields, in lexical order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

fn kind_error(key: &str, expected: &'static str) -> crate::error::PorenetError {
    GeometryError::PropertyKind {
        key: key.into(),
        expected,
    }
    .into()
}

/// A throat area model together with the property keys it reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThroatAreaModel {
    /// [`throat_area::cylinder`] over a diameter field.
    Cylinder { diameter: String },
    /// [`throat_area::cuboid`] over a diameter field.
    Cuboid { diameter: String },
    /// [`throat_area::voronoi`] over polygon and normal fields.
    Voronoi {
        offset_vertices: String,
        normal: String,
    },
}

impl ThroatAreaModel {
    /// Key under which callers conventionally store the computed area.
    pub const PROPNAME: &'static str = "throat.area";

    /// Default diameter key.
    pub const DIAMETER: &'static str = "throat.diameter";

    /// Default offset-vertex key.
    pub const OFFSET_VERTICES: &'static str = "throat.offset_vertices";

    /// Default normal key.
    pub const NORMAL: &'static str = "throat.normal";

    /// Cylinder model reading the default diameter key.
    #[must_use]
    pub fn cylinder() -> Self {
        Self::Cylinder {
            diameter: Self::DIAMETER.into(),
        }
    }

    /// Cuboid model reading the default diameter key.
    #[must_use]
    pub fn cuboid() -> Self {
        Self::Cuboid {
            diameter: Self::DIAMETER.into(),
        }
    }

    /// Voronoi model reading the default polygon and normal keys.
    #[must_use]
    pub fn voronoi() -> Self {
        Self::Voronoi {
            offset_vertices: Self::OFFSET_VERTICES.into(),
            normal: Self::NORMAL.into(),
        }
    }

    /// Computes one area per throat from the stored fields.
    ///
    /// The store is not modified; the caller decides where to keep the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a field the model reads is missing or has the
    /// wrong kind.
    pub fn regenerate(&self, props: &ThroatProperties) -> Result<Vec<f64>> {
        tracing::debug!(model = ?self, throats = props.num_throats(), "regenerating throat area");
        match self {
            Self::Cylinder { diameter } => Ok(throat_area::cylinder(props.scalar(diameter)?)),
            Self::Cuboid { diameter } => Ok(throat_area::cuboid(props.scalar(diameter)?)),
            Self::Voronoi {
                offset_vertices,
                normal,
            } => Ok(throat_area::voronoi(
                props.polygons(offset_vertices)?,
                props.vectors(normal)?,
            )),
        }
    }
}
