use foundation_lib::collections::circ::Deque;
use foundation_lib::collections::contiguous::Vector;
use foundation_lib::print::FormatError;
use foundation_lib::{printf, sprintf};

fn main() -> Result<(), FormatError> {
    printf!("\n[Vector]\n\n")?;

    let mut vec = Vector::<u32>::new();
    for i in 0..8 {
        vec.push(i);
        printf!("len %u, cap %u\n", vec.len() as u32, vec.cap() as u32)?;
    }
    vec.push(8);
    printf!("after growth: len %u, cap %u\n", vec.len() as u32, vec.cap() as u32)?;

    vec.insert(2, 100);
    println!("{:?}", vec);
    println!("{:?}, {:?}", vec.remove(3), vec);

    printf!("\n[Deque]\n\n")?;

    let mut deque = Deque::with_cap(4);
    deque.extend(1..=4);
    deque.rotate();
    println!("rotated: {:?}", deque);
    deque.rrotate();
    deque.swap();
    println!("swapped: {:?}", deque);

    printf!("\n[Print]\n\n")?;

    let line = sprintf!("%d-%s-%%", 42_i32, "hi")?;
    let text = std::str::from_utf8(&line).unwrap_or_default();
    let len = printf!(
        "%s (%u bytes) at %p, %x/%X\n",
        text,
        line.len() as u32,
        &raw const line,
        48879_u32,
        48879_u32,
    )?;
    printf!("that line was %d bytes\n", len as i32)?;

    Ok(())
}
