// Code generated by stprotoc from canvas.stproto. DO NOT EDIT.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use stproto::{DataType, ProtoError, StBuffer, StBufferMut, StCodec};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// horizontal position
    #[serde(rename = "x")]
    pub x: i32,
    #[serde(rename = "y")]
    pub y: i32,
}

impl StCodec for Point {
    fn write_data_buf(&self, bf: &mut StBufferMut) {
        bf.write_struct_length(2);

        bf.write_tag(0);
        bf.write_data_type(DataType::Int);
        bf.write_var_int(self.x);

        bf.write_tag(1);
        bf.write_data_type(DataType::Int);
        bf.write_var_int(self.y);
    }

    fn read_data_buf(&mut self, bf: &mut StBuffer) -> Result<(), ProtoError> {
        let count = bf.read_struct_length()?;
        for _ in 0..count {
            let tag = bf.read_tag()?;
            let data_type = bf.read_data_type()?;
            match tag {
                0 => {
                    let d1 = bf.read_var_int()?;
                    self.x = d1;
                }
                1 => {
                    let d1 = bf.read_var_int()?;
                    self.y = d1;
                }
                _ => bf.skip_value(data_type)?,
            }
        }
        Ok(())
    }
}

impl Point {
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    #[serde(rename = "id")]
    pub id: i64,
    #[serde(rename = "label")]
    pub label: String,
    #[serde(rename = "origin")]
    pub origin: Point,
    #[serde(rename = "points")]
    pub points: Vec<Point>,
    #[serde(rename = "width")]
    pub width: f32,
    #[serde(rename = "opacity")]
    pub opacity: f64,
    #[serde(rename = "closed")]
    pub closed: bool,
    #[serde(rename = "tag")]
    pub tag: u8,
    #[serde(rename = "mask")]
    pub mask: Vec<u8>,
    #[serde(rename = "grid")]
    pub grid: Vec<Vec<i32>>,
    #[serde(rename = "meta")]
    pub meta: HashMap<String, String>,
    #[serde(rename = "anchors")]
    pub anchors: HashMap<i32, Point>,
}

impl StCodec for Stroke {
    fn write_data_buf(&self, bf: &mut StBufferMut) {
        bf.write_struct_length(12);

        bf.write_tag(0);
        bf.write_data_type(DataType::Long);
        bf.write_var_int64(self.id);

        bf.write_tag(1);
        bf.write_data_type(DataType::String);
        bf.write_string(&self.label);

        bf.write_tag(2);
        bf.write_data_type(DataType::Struct);
        self.origin.write_data_buf(bf);

        bf.write_tag(3);
        bf.write_data_type(DataType::List);
        bf.write_data_type(DataType::Struct);
        bf.write_length(self.points.len() as u32);
        for e1 in self.points.iter() {
            e1.write_data_buf(bf);
        }

        bf.write_tag(4);
        bf.write_data_type(DataType::Float);
        bf.write_var_float(self.width);

        bf.write_tag(5);
        bf.write_data_type(DataType::Double);
        bf.write_double(self.opacity);

        bf.write_tag(6);
        bf.write_data_type(DataType::Bool);
        bf.write_bool(self.closed);

        bf.write_tag(7);
        bf.write_data_type(DataType::Byte);
        bf.write_byte(self.tag);

        bf.write_tag(8);
        bf.write_data_type(DataType::List);
        bf.write_data_type(DataType::Byte);
        bf.write_length(self.mask.len() as u32);
        bf.write_bytes(&self.mask);

        bf.write_tag(9);
        bf.write_data_type(DataType::List);
        bf.write_data_type(DataType::List);
        bf.write_length(self.grid.len() as u32);
        for e1 in self.grid.iter() {
            bf.write_data_type(DataType::Int);
            bf.write_length(e1.len() as u32);
            for e2 in e1.iter() {
                bf.write_var_int(*e2);
            }
        }

        bf.write_tag(10);
        bf.write_data_type(DataType::Map);
        bf.write_data_type(DataType::String);
        bf.write_data_type(DataType::String);
        bf.write_length(self.meta.len() as u32);
        for (k1, v1) in self.meta.iter() {
            bf.write_string(k1);
            bf.write_string(v1);
        }

        bf.write_tag(11);
        bf.write_data_type(DataType::Map);
        bf.write_data_type(DataType::Int);
        bf.write_data_type(DataType::Struct);
        bf.write_length(self.anchors.len() as u32);
        for (k1, v1) in self.anchors.iter() {
            bf.write_var_int(*k1);
            v1.write_data_buf(bf);
        }
    }

    fn read_data_buf(&mut self, bf: &mut StBuffer) -> Result<(), ProtoError> {
        let count = bf.read_struct_length()?;
        for _ in 0..count {
            let tag = bf.read_tag()?;
            let data_type = bf.read_data_type()?;
            match tag {
                0 => {
                    let d1 = bf.read_var_int64()?;
                    self.id = d1;
                }
                1 => {
                    let d1 = bf.read_string()?;
                    self.label = d1;
                }
                2 => {
                    let mut d1 = Point::new();
                    d1.read_data_buf(bf)?;
                    self.origin = d1;
                }
                3 => {
                    bf.read_data_type()?;
                    let l1 = bf.read_length()?;
                    let mut d1: Vec<Point> = Vec::with_capacity(l1 as usize);
                    for _ in 0..l1 {
                        let mut e2 = Point::new();
                        e2.read_data_buf(bf)?;
                        d1.push(e2);
                    }
                    self.points = d1;
                }
                4 => {
                    let d1 = bf.read_var_float()?;
                    self.width = d1;
                }
                5 => {
                    let d1 = bf.read_double()?;
                    self.opacity = d1;
                }
                6 => {
                    let d1 = bf.read_bool()?;
                    self.closed = d1;
                }
                7 => {
                    let d1 = bf.read_byte()?;
                    self.tag = d1;
                }
                8 => {
                    bf.read_data_type()?;
                    let l1 = bf.read_length()?;
                    let d1 = bf.read_bytes(l1 as usize)?.to_vec();
                    self.mask = d1;
                }
                9 => {
                    bf.read_data_type()?;
                    let l1 = bf.read_length()?;
                    let mut d1: Vec<Vec<i32>> = Vec::with_capacity(l1 as usize);
                    for _ in 0..l1 {
                        bf.read_data_type()?;
                        let l2 = bf.read_length()?;
                        let mut e2: Vec<i32> = Vec::with_capacity(l2 as usize);
                        for _ in 0..l2 {
                            let e3 = bf.read_var_int()?;
                            e2.push(e3);
                        }
                        d1.push(e2);
                    }
                    self.grid = d1;
                }
                10 => {
                    bf.read_data_type()?;
                    bf.read_data_type()?;
                    let l1 = bf.read_length()?;
                    let mut d1: HashMap<String, String> = HashMap::with_capacity(l1 as usize);
                    for _ in 0..l1 {
                        let k2 = bf.read_string()?;
                        let v2 = bf.read_string()?;
                        d1.insert(k2, v2);
                    }
                    self.meta = d1;
                }
                11 => {
                    bf.read_data_type()?;
                    bf.read_data_type()?;
                    let l1 = bf.read_length()?;
                    let mut d1: HashMap<i32, Point> = HashMap::with_capacity(l1 as usize);
                    for _ in 0..l1 {
                        let k2 = bf.read_var_int()?;
                        let mut v2 = Point::new();
                        v2.read_data_buf(bf)?;
                        d1.insert(k2, v2);
                    }
                    self.anchors = d1;
                }
                _ => bf.skip_value(data_type)?,
            }
        }
        Ok(())
    }
}

impl Stroke {
    pub fn new() -> Self {
        Self {
            id: 0,
            label: String::new(),
            origin: Point::new(),
            points: Vec::new(),
            width: 0.0,
            opacity: 0.0,
            closed: false,
            tag: 0,
            mask: Vec::new(),
            grid: Vec::new(),
            meta: HashMap::new(),
            anchors: HashMap::new(),
        }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawReq {
    #[serde(rename = "stroke")]
    pub stroke: Stroke,
    #[serde(rename = "force")]
    pub force: bool,
}

impl StCodec for DrawReq {
    fn write_data_buf(&self, bf: &mut StBufferMut) {
        bf.write_struct_length(2);

        bf.write_tag(0);
        bf.write_data_type(DataType::Struct);
        self.stroke.write_data_buf(bf);

        bf.write_tag(1);
        bf.write_data_type(DataType::Bool);
        bf.write_bool(self.force);
    }

    fn read_data_buf(&mut self, bf: &mut StBuffer) -> Result<(), ProtoError> {
        let count = bf.read_struct_length()?;
        for _ in 0..count {
            let tag = bf.read_tag()?;
            let data_type = bf.read_data_type()?;
            match tag {
                0 => {
                    let mut d1 = Stroke::new();
                    d1.read_data_buf(bf)?;
                    self.stroke = d1;
                }
                1 => {
                    let d1 = bf.read_bool()?;
                    self.force = d1;
                }
                _ => bf.skip_value(data_type)?,
            }
        }
        Ok(())
    }
}

impl DrawReq {
    pub fn new() -> Self {
        Self {
            stroke: Stroke::new(),
            force: false,
        }
    }
}

impl Default for DrawReq {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawRsp {
    #[serde(rename = "ok")]
    pub ok: bool,
    #[serde(rename = "message")]
    pub message: String,
}

impl StCodec for DrawRsp {
    fn write_data_buf(&self, bf: &mut StBufferMut) {
        bf.write_struct_length(2);

        bf.write_tag(0);
        bf.write_data_type(DataType::Bool);
        bf.write_bool(self.ok);

        bf.write_tag(1);
        bf.write_data_type(DataType::String);
        bf.write_string(&self.message);
    }

    fn read_data_buf(&mut self, bf: &mut StBuffer) -> Result<(), ProtoError> {
        let count = bf.read_struct_length()?;
        for _ in 0..count {
            let tag = bf.read_tag()?;
            let data_type = bf.read_data_type()?;
            match tag {
                0 => {
                    let d1 = bf.read_bool()?;
                    self.ok = d1;
                }
                1 => {
                    let d1 = bf.read_string()?;
                    self.message = d1;
                }
                _ => bf.skip_value(data_type)?,
            }
        }
        Ok(())
    }
}

impl DrawRsp {
    pub fn new() -> Self {
        Self {
            ok: false,
            message: String::new(),
        }
    }
}

impl Default for DrawRsp {
    fn default() -> Self {
        Self::new()
    }
}
