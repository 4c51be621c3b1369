use std::sync::LazyLock;

use super::*;
use crate::RegistryCell;
use crate::descriptor::PropertyDescriptor;

struct Sensor {
	reading: i64,
	unit: String,
}

static SENSOR_PROPERTIES: LazyLock<PropertyRegistry> = LazyLock::new(|| {
	PropertyRegistry::builder("sensor")
		.extend(crate::properties![
			"reading" => (|s: &Sensor| s.reading, |s: &mut Sensor, v| s.reading = v),
			"unit" => (|s: &Sensor| s.unit.clone()),
		])
		.build()
		.unwrap()
});

crate::impl_reflectable!(Sensor => SENSOR_PROPERTIES);

struct Valve {
	open: bool,
}

static VALVE_PROPERTIES: RegistryCell = RegistryCell::new("valve");

crate::impl_reflectable!(Valve => VALVE_PROPERTIES);

fn valve_registry() -> &'static PropertyRegistry {
	VALVE_PROPERTIES.get_or_init(|| {
		PropertyRegistry::builder("valve")
			.property(PropertyDescriptor::read_write("open", |v: &Valve| v.open, |v: &mut Valve, o| v.open = o))
			.build()
			.unwrap()
	})
}

fn sensor() -> Sensor {
	Sensor {
		reading: 20,
		unit: "C".into(),
	}
}

#[test]
fn forwards_strict_access() {
	let mut s = sensor();
	s.set_property("reading", 21i64);
	assert_eq!(s.get_property::<i64>("reading"), 21);
	assert_eq!(s.get_property::<String>("unit"), "C");
}

#[test]
fn forwards_dynamic_access() {
	let mut s = sensor();
	assert_eq!(s.get_value("unit"), Ok(Value::from("C")));
	s.set_value("reading", Value::Integer(-4)).unwrap();
	assert_eq!(s.reading, -4);
	assert!(matches!(s.get_value("pressure"), Err(PropertyError::NotFound { .. })));
}

#[test]
fn works_through_trait_objects() {
	let mut objects: Vec<Box<dyn Reflectable>> = vec![Box::new(sensor())];
	valve_registry();
	objects.push(Box::new(Valve { open: false }));

	for object in &objects {
		for name in object.property_names() {
			// strict-only properties refuse dynamic reads, but every name resolves
			let result = object.get_value(name);
			assert!(!matches!(result, Err(PropertyError::NotFound { .. })), "{name}: {result:?}");
		}
	}

	objects[1].set_property("open", true);
	assert!(objects[1].get_property::<bool>("open"));
	assert_eq!(objects[0].get_value("reading"), Ok(Value::Integer(20)));
}

#[test]
#[should_panic(expected = "is read-only")]
fn strict_read_only_through_object_faults() {
	sensor().set_property("unit", String::from("F"));
}

#[test]
fn instances_share_one_registry() {
	let a = sensor();
	let b = sensor();
	assert!(std::ptr::eq(a.properties(), b.properties()));
	assert_eq!(a.property_names(), ["reading", "unit"]);
}

#[test]
fn as_any_yields_concrete_type() {
	let boxed: Box<dyn Reflectable> = Box::new(sensor());
	assert!(boxed.as_any().is::<Sensor>());
	assert!(SENSOR_PROPERTIES.property("reading").accepts(boxed.as_any()));
}
