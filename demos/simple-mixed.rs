use packbin::{GuillotinePacker, InputItem};

fn main() {
    env_logger::init();

    let mut inputs: Vec<_> = (0..5).map(|_| InputItem::new((100, 100))).collect();
    inputs.push(InputItem::new((200, 40)));
    inputs.push(InputItem::new((30, 250)));

    let packer = GuillotinePacker::new().max_size(256);
    let output = packer.pack(&inputs).expect("inputs fit the maximum size");

    for (index, bucket) in output.buckets().iter().enumerate() {
        println!(
            "Bucket {}: {:?}, {:.0}% occupied",
            index,
            bucket.size(),
            bucket.occupancy() * 100.0
        );

        for item in bucket.items() {
            println!(
                "  {:?} at {:?}, size {:?}{}",
                item.id(),
                item.position(),
                item.size(),
                if item.flipped() { ", rotated" } else { "" }
            );
        }
    }
}
