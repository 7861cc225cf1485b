use reclist::{from_str, to_string, Record, Scanner, Writer};

const BLOB: &str = r#"
# Solar system objects
@star=Sun
	radius:	109.3
	mass:	333000
	gravity: 27.94
	descrip: "The Sun is the star at the center
		of the Solar System. It is a nearly
		perfect sphere of hot plasma. It is
		by far the most important source of
		energy for life on Earth."

@planet=Jupiter
	radius:	10.97
	mass:	317.83
	gravity: 2.528
	descrip: "Jupiter is the fifth planet from
		the Sun and the largest in the Solar
		System. It is a giant planet with a
		mass one-thousandth of the Sun, but
		two-and-a-half times that of all other
		planets in the Solar System combined."
	moons:	Ganymede Callisto Io Europa

@planet=Saturn
	radius:	9.140
	mass:	95.162
	gravity: 1.065
	descrip: "Saturn is the sixth planet from the
		Sun and the second-largest in the
		Solar System, after Jupiter. It is a
		gas giant with an average radius about
		nine times that of Earth. The planet's
		most famous feature is its prominent
		ring system that is composed mostly of
		ice particles, with a small amount of
		rocky debris and dust."
	moons:	Titan Rhea Iapetus Dione Tethys Enceladus Mimas Hyperion Phoebe

@planet=Neptune
	radius: 3.865
	mass:	17.147
	gravity: 1.137
	descrip: "Neptune is the eighth and farthest
		known planet from the Sun in the Solar
		System. In the Solar System, it is the
		fourth-largest planet by diameter, the
		third-most-massive planet, and the
		densest giant planet."
	moons:	Triton Proteus Nereid

@planet=Uranus
	radius: 3.981
	mass:	14.539
	gravity: 0.90
	descrip: "Uranus is the seventh planet from the
		Sun. It has the third-largest planetary
		radius and fourth-largest mass in the
		Solar System."
	moons:	Titania Oberon Umbriel Ariel Miranda

@planet=Earth
	radius: 1
	mass: 1
	gravity: 1
	descrip: "Earth is the third planet from the Sun
		and the only object in the Universe known
		to harbor life."
	moons:	Moon

@planet=Venus
	radius: 0.9499
	mass:	0.815
	gravity: 0.905
	descrip: "Venus is the second planet from the Sun.
		It has the longest rotation period (243
		days) of any planet in the Solar System."

@planet=Mars
	radius: 0.5320
	mass:	0.107
	gravity: 0.38
	descrip: "Mars is the fourth planet from the Sun
		and the second-smallest planet in the
		Solar System after Mercury. Mars is often
		referred as the \"Red Planet\" because
		the iron oxide prevalent on its	surface
		gives it a reddish appearance that is
		distinctive among the astronomical bodies
		visible to the naked eye."

@planet=Mercury
	radius:	0.3829
	mass:	0.0553
	gravity: 0.38
	descrip: "Mercury is the smallest and innermost
		planet in the Solar System."

@moon=Ganymede
	radius: 0.4135
	mass:	0.0248
	gravity: 0.15
	parent:	Jupiter

@moon=Titan
	radius:	0.4043
	mass:	0.0225
	gravity: 0.14
	parent: Saturn

@moon=Callisto
	radius: 0.3783
	mass:	0.018
	gravity: 0.126
	parent: Jupiter

@moon=Io
	radius: 0.2859
	mass:	0.015
	gravity: 0.183
	parent: Jupiter

@moon=Moon
	radius: 0.2727
	mass:	0.0123
	gravity: 0.166
	parent: Earth

@moon=Europa
	radius: 0.1450
	mass:	0.0080
	gravity: 0.134
	parent: Jupiter

@moon=Triton
	radius: 0.2124
	mass:	0.0036
	gravity: 0.0797
	parent:	Neptune

@dwarf=Eris
	radius:	0.1825
	mass:	0.0028
	gravity: 0.0672
	family:	SDO
	moons:	Dysnomia

@dwarf=Pluto
	radius:	0.186
	mass:	0.0022
	gravity: 0.062
	family: Plutino
	moons:	Charon
"#;

const EXPECTED: [(&str, &str, &str); 18] = [
    ("Sun", "star", ""),
    ("Jupiter", "planet", ""),
    ("Saturn", "planet", ""),
    ("Neptune", "planet", ""),
    ("Uranus", "planet", ""),
    ("Earth", "planet", ""),
    ("Venus", "planet", ""),
    ("Mars", "planet", ""),
    ("Mercury", "planet", ""),
    ("Ganymede", "moon", "Jupiter"),
    ("Titan", "moon", "Saturn"),
    ("Callisto", "moon", "Jupiter"),
    ("Io", "moon", "Jupiter"),
    ("Moon", "moon", "Earth"),
    ("Europa", "moon", "Jupiter"),
    ("Triton", "moon", "Neptune"),
    ("Eris", "dwarf", ""),
    ("Pluto", "dwarf", ""),
];

/// The sample from the format documentation.
const SAMPLE: &str = r#"# Solar system objects
@star=Sun
	radius:	109.3
	mass:	333000
	gravity: 27.94
	descrip: "The Sun is the star at the center
		of the Solar System. It is a nearly
		perfect sphere of hot plasma. It is
		by far the most important source of
		energy for life on Earth."

@planet=Jupiter
	radius:	10.97
	mass:	317.83
	gravity: 2.528
	descrip: "Jupiter is the fifth planet from
		the Sun and the largest in the Solar
		System."
	moons:	Ganymede Callisto Io Europa

@planet=Mars
	radius: 0.5320
	mass:	0.107
	gravity: 0.38
	descrip: "Mars is the fourth planet from the Sun
		and the second-smallest planet in the
		Solar System after Mercury. Mars is often
		referred as the \"Red Planet\" because
		the iron oxide prevalent on its	surface
		gives it a reddish appearance."

@moon=Titan
	radius:	0.4043
	mass:	0.0225
	gravity: 0.14
	parent: Saturn

@dwarf=Eris
	radius:	0.1825
	mass:	0.0028
	gravity: 0.0672
	family:	SDO
"#;

#[test]
fn test_scan_solar_system() {
    let mut scanner = Scanner::from_str(BLOB);
    let mut i = 0;
    while let Some(rec) = scanner.next_record().unwrap() {
        let (id, kind, parent) = EXPECTED[i];
        assert_eq!(rec.id(), id);
        assert_eq!(rec.kind(), kind, "type of {}", id);
        if rec.kind() == "planet" {
            assert!(!rec.get("descrip").is_empty(), "{} empty description", id);
        }
        assert_eq!(rec.get("parent"), parent, "parent of {}", id);
        i += 1;
    }
    assert!(scanner.err().is_none());
    assert_eq!(i, EXPECTED.len());
    assert_eq!(scanner.records_read(), EXPECTED.len());
}

#[test]
fn test_scan_documented_sample() {
    let records = from_str(SAMPLE).unwrap();
    let ids: Vec<_> = records.iter().map(|r| (r.kind(), r.id())).collect();
    assert_eq!(
        ids,
        vec![
            ("star", "Sun"),
            ("planet", "Jupiter"),
            ("planet", "Mars"),
            ("moon", "Titan"),
            ("dwarf", "Eris"),
        ]
    );

    let jupiter = &records[1];
    assert_eq!(jupiter.get("moons"), "Ganymede Callisto Io Europa");
    assert_eq!(
        jupiter.keys(),
        vec!["descrip", "gravity", "mass", "moons", "radius"]
    );

    let mars = &records[2];
    assert!(mars.get("descrip").contains("the \"Red Planet\" because"));
    assert!(mars.get("descrip").contains("on its surface\ngives"));

    let sun = &records[0];
    assert!(sun
        .get("descrip")
        .starts_with("The Sun is the star at the center\nof the Solar System."));
    assert_eq!(sun.get("descrip").lines().count(), 5);

    assert_eq!(records[3].get("parent"), "Saturn");
    assert_eq!(records[4].get("family"), "SDO");
}

#[test]
fn test_write_then_scan() {
    let mut scanner = Scanner::from_str(BLOB);
    let mut writer = Writer::new(Vec::new());

    let mut recs: Vec<Record> = Vec::new();
    for rec in &mut scanner {
        let rec = rec.unwrap();
        writer.write_record(&rec).unwrap();
        recs.push(rec);
    }
    assert!(scanner.err().is_none());
    writer.flush().unwrap();
    assert!(writer.err().is_none());
    assert_eq!(writer.records_written(), recs.len());

    let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
    let mut i = 0;
    for rec in Scanner::from_str(&out) {
        let rec = rec.unwrap();
        assert_eq!(rec.kind(), recs[i].kind());
        assert_eq!(rec.id(), recs[i].id());
        for key in recs[i].keys() {
            assert_eq!(rec.get(key), recs[i].get(key), "{} key {}", rec.id(), key);
        }
        for key in rec.keys() {
            assert_eq!(rec.get(key), recs[i].get(key), "{} key {}", rec.id(), key);
        }
        i += 1;
    }
    assert_eq!(i, recs.len());
}

#[test]
fn test_written_text_is_stable() {
    let records = from_str(BLOB).unwrap();
    let once = to_string(&records);
    let twice = to_string(&from_str(&once).unwrap());
    assert_eq!(once, twice);
}

#[test]
fn test_line_breaks_survive_rewrite() {
    let input = r#"
@note=Changelog
	text: "First release.

		Second release: adds
		the \"writer\".


		Third release."
"#;
    let records = from_str(input).unwrap();
    assert_eq!(
        records[0].get("text"),
        "First release.\nSecond release: adds\nthe \"writer\".\nThird release."
    );

    let out = to_string(&records);
    assert_eq!(
        out,
        "@note=Changelog\n\ttext:\t\"First release.\n\t\tSecond release: adds\n\t\tthe \\\"writer\\\".\n\t\tThird release.\"\n"
    );
    assert_eq!(from_str(&out).unwrap(), records);
}

#[test]
fn test_scan_from_reader() {
    let records = reclist::from_reader(std::io::Cursor::new(BLOB.as_bytes())).unwrap();
    assert_eq!(records.len(), EXPECTED.len());

    let small_buffer = Scanner::with_capacity(7, BLOB.as_bytes());
    assert_eq!(small_buffer.count(), EXPECTED.len());
}
